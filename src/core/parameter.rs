use crate::core::cell::ParamCell;
use crate::core::op::BinaryOp;
use alloc::rc::Rc;
use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
#[cfg(feature = "debug_visualize")]
use alloc::format;
#[cfg(feature = "debug_visualize")]
use alloc::string::String;

/// The closed set of parameter variants.
///
/// `compute()` dispatches on this tag; there is no open-ended subclassing of
/// the parameter behavior.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParamKind {
    /// A bare parameter. Its value is refreshed externally, typically by a
    /// DSP engine writing into the bound cell; `compute()` is a no-op.
    Plain,
    /// A value fixed at construction. `compute()` is a no-op.
    Constant,
    /// Recombines two mono sources into one stereo pair.
    StereoCombine,
    /// Per-channel binary arithmetic over two dependencies.
    Binary(BinaryOp),
}

struct Node {
    kind: ParamKind,
    /// Fixed at construction: empty, or exactly [left, right].
    deps: Vec<Parameter>,
    left_cell: RefCell<ParamCell>,
    right_cell: RefCell<ParamCell>,
    left_output: Cell<f32>,
    right_output: Cell<f32>,
    connected: Cell<bool>,
    torn_down: Cell<bool>,
}

impl Node {
    /// Drops the references to whatever cells are currently bound, replacing
    /// them with fresh private cells holding the current outputs. Engine
    /// memory is never freed here; only the handle is released. Idempotent.
    fn release(&self) {
        if self.torn_down.replace(true) {
            return;
        }
        *self.left_cell.borrow_mut() = ParamCell::new(self.left_output.get());
        *self.right_cell.borrow_mut() = ParamCell::new(self.right_output.get());
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        self.release();
    }
}

/// A scalar or stereo signal value in a parameter dependency graph.
///
/// A parameter is a constant, a value an external DSP engine drives through a
/// bound [`ParamCell`], or a value derived from one or two other parameters.
/// `Parameter` is a cheap shared handle: cloning it shares the node, so one
/// parameter may appear as a dependency of several others.
///
/// Every write to a channel output is mirrored into the cell currently bound
/// for that channel before the write returns, so an engine reading the cell
/// always observes the latest value (the "mirrored write" contract).
///
/// The graph model is single-threaded: an external driver calls `compute()`
/// on each parameter after all of its dependencies have been refreshed.
/// Because a parameter's dependencies are fixed at construction and can only
/// name parameters that already exist, a cyclic graph cannot be built.
#[derive(Clone)]
pub struct Parameter {
    node: Rc<Node>,
}

impl Parameter {
    fn with_kind(kind: ParamKind, deps: Vec<Parameter>) -> Self {
        Parameter {
            node: Rc::new(Node {
                kind,
                deps,
                left_cell: RefCell::new(ParamCell::new(0.0)),
                right_cell: RefCell::new(ParamCell::new(0.0)),
                left_output: Cell::new(0.0),
                right_output: Cell::new(0.0),
                connected: Cell::new(false),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Creates a disconnected parameter with both outputs at 0.
    pub fn new() -> Self {
        Parameter::with_kind(ParamKind::Plain, Vec::new())
    }

    /// Creates a constant parameter.
    ///
    /// Both channels are set to `value` and the parameter is marked
    /// connected, so the engine will not try to populate it further. All
    /// numeric conversions (`From<f32>` and friends) route through here.
    pub fn constant(value: f32) -> Self {
        let param = Parameter::with_kind(ParamKind::Constant, Vec::new());
        param.set_left_output(value);
        param.set_right_output(value);
        param.node.connected.set(true);
        param
    }

    /// Creates a stereo-combine parameter from two mono sources.
    ///
    /// Each source is treated as mono: on `compute()` the left channel reads
    /// `left`'s left output and the right channel reads `right`'s LEFT
    /// output, broadcasting each source's mono value into the pair.
    pub fn stereo(left: Parameter, right: Parameter) -> Self {
        Parameter::with_kind(ParamKind::StereoCombine, vec![left, right])
    }

    /// Creates an arithmetic parameter combining `left` and `right` under
    /// `op`, per channel.
    pub fn binary(op: BinaryOp, left: Parameter, right: Parameter) -> Self {
        Parameter::with_kind(ParamKind::Binary(op), vec![left, right])
    }

    // Math helpers. Each returns a new derived parameter with `self` as the
    // left dependency; neither operand is modified.

    /// Multiplication helper.
    pub fn scaled_by(&self, parameter: Parameter) -> Parameter {
        Parameter::binary(BinaryOp::Multiply, self.clone(), parameter)
    }

    /// Division helper.
    pub fn divided_by(&self, parameter: Parameter) -> Parameter {
        Parameter::binary(BinaryOp::Divide, self.clone(), parameter)
    }

    /// Summation helper.
    pub fn plus(&self, parameter: Parameter) -> Parameter {
        Parameter::binary(BinaryOp::Add, self.clone(), parameter)
    }

    /// Subtraction helper.
    pub fn minus(&self, parameter: Parameter) -> Parameter {
        Parameter::binary(BinaryOp::Subtract, self.clone(), parameter)
    }

    /// Sets the left channel output, mirroring it into the bound left cell
    /// before returning.
    pub fn set_left_output(&self, value: f32) {
        self.node.left_output.set(value);
        self.node.left_cell.borrow().set(value);
    }

    /// Sets the right channel output, mirroring it into the bound right cell
    /// before returning.
    pub fn set_right_output(&self, value: f32) {
        self.node.right_output.set(value);
        self.node.right_cell.borrow().set(value);
    }

    /// Mono convenience: sets both channel outputs to `value`.
    ///
    /// The left cell is written once here and again by the left-output
    /// mirror; the original parameter class had the same double write and
    /// the observable contract is kept.
    pub fn set_value(&self, value: f32) {
        self.node.left_cell.borrow().set(value);
        self.set_left_output(value);
        self.set_right_output(value);
    }

    /// Rebinds the left channel to `cell` and writes the current left output
    /// into it.
    ///
    /// Last write wins: a previously bound cell keeps whatever value it last
    /// received and is never touched again. The parameter never owns bound
    /// memory.
    pub fn bind(&self, cell: ParamCell) {
        cell.set(self.node.left_output.get());
        *self.node.left_cell.borrow_mut() = cell;
    }

    /// Rebinds both channels, writing the current outputs into each cell.
    pub fn bind_stereo(&self, left: ParamCell, right: ParamCell) {
        left.set(self.node.left_output.get());
        *self.node.left_cell.borrow_mut() = left;
        right.set(self.node.right_output.get());
        *self.node.right_cell.borrow_mut() = right;
    }

    /// One compute tick: refreshes the outputs from the dependencies.
    ///
    /// The caller must have refreshed every dependency first (topological
    /// order); see [`crate::core::graph::compute_tree`] for a walk that
    /// guarantees this. For `Plain` and `Constant` parameters this is a
    /// no-op.
    pub fn compute(&self) {
        match self.node.kind {
            ParamKind::Plain | ParamKind::Constant => {}
            ParamKind::StereoCombine => {
                let left = &self.node.deps[0];
                let right = &self.node.deps[1];
                self.set_left_output(left.left_output());
                self.set_right_output(right.left_output());
            }
            ParamKind::Binary(op) => {
                let a = &self.node.deps[0];
                let b = &self.node.deps[1];
                self.set_left_output(op.apply(a.left_output(), b.left_output()));
                self.set_right_output(op.apply(a.right_output(), b.right_output()));
            }
        }
    }

    /// Releases engine-side resources: drops the references to any bound
    /// cells, replacing them with private ones.
    ///
    /// Idempotent; calling it again does nothing. If it is never called, the
    /// node runs it once when the last handle drops.
    pub fn teardown(&self) {
        self.node.release();
    }

    /// Current left channel output.
    pub fn left_output(&self) -> f32 {
        self.node.left_output.get()
    }

    /// Current right channel output.
    pub fn right_output(&self) -> f32 {
        self.node.right_output.get()
    }

    /// Mono read convenience: the left channel output.
    pub fn value(&self) -> f32 {
        self.node.left_output.get()
    }

    /// The parameters this one reads during `compute()`, in left-then-right
    /// order. Empty for plain and constant parameters.
    pub fn dependencies(&self) -> &[Parameter] {
        &self.node.deps
    }

    /// True once a constant value has been assigned at construction.
    pub fn is_connected(&self) -> bool {
        self.node.connected.get()
    }

    /// The variant tag this parameter computes as.
    pub fn kind(&self) -> ParamKind {
        self.node.kind
    }

    /// True if both handles refer to the same node.
    pub fn ptr_eq(a: &Parameter, b: &Parameter) -> bool {
        Rc::ptr_eq(&a.node, &b.node)
    }

    #[cfg(feature = "debug_visualize")]
    fn kind_name(&self) -> &'static str {
        match self.node.kind {
            ParamKind::Plain => "Plain",
            ParamKind::Constant => "Constant",
            ParamKind::StereoCombine => "StereoCombine",
            ParamKind::Binary(op) => match op {
                BinaryOp::Multiply => "Product",
                BinaryOp::Divide => "Division",
                BinaryOp::Add => "Sum",
                BinaryOp::Subtract => "Difference",
            },
        }
    }

    /// Returns an ASCII visualization of this parameter and its dependency
    /// graph.
    #[cfg(feature = "debug_visualize")]
    pub fn visualize(&self, indent: usize) -> String {
        let spaces = " ".repeat(indent);
        let mut output = format!(
            "{}{} (L: {}, R: {})\n",
            spaces,
            self.kind_name(),
            self.left_output(),
            self.right_output()
        );
        for dep in self.dependencies() {
            output.push_str(&dep.visualize(indent + 2));
        }
        output
    }
}

impl Default for Parameter {
    fn default() -> Self {
        Parameter::new()
    }
}
