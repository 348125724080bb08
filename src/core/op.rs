/// Operator tag for the arithmetic parameter variants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BinaryOp {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl BinaryOp {
    /// Applies the operator to one pair of channel values.
    ///
    /// Division by zero follows IEEE-754 (signed infinity, or NaN for 0/0);
    /// no error path exists here.
    pub fn apply(self, lhs: f32, rhs: f32) -> f32 {
        match self {
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
        }
    }

    #[cfg(feature = "debug_visualize")]
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
        }
    }
}
