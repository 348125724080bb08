use crate::core::parameter::Parameter;
use alloc::vec::Vec;

/// Calls `compute()` on every parameter reachable from `root`, dependencies
/// before dependents.
///
/// This is the traversal the external driver contract requires: by the time
/// any parameter computes, all of its dependencies have computed in the same
/// walk. A parameter shared by several dependents (a diamond) is visited
/// once per walk.
pub fn compute_tree(root: &Parameter) {
    walk(root, &mut Vec::new(), &|param| param.compute());
}

/// Calls `teardown()` on every parameter reachable from `root`, dependencies
/// before dependents. Teardown is idempotent, so overlapping walks are safe.
pub fn teardown_tree(root: &Parameter) {
    walk(root, &mut Vec::new(), &|param| param.teardown());
}

fn walk(param: &Parameter, visited: &mut Vec<Parameter>, apply: &dyn Fn(&Parameter)) {
    if visited.iter().any(|seen| Parameter::ptr_eq(seen, param)) {
        return;
    }
    visited.push(param.clone());
    for dep in param.dependencies() {
        walk(dep, visited, apply);
    }
    apply(param);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_tree_nested() {
        // (3 * 4) + (10 - 3) = 19
        let product = Parameter::constant(3.0).scaled_by(Parameter::constant(4.0));
        let difference = Parameter::constant(10.0).minus(Parameter::constant(3.0));
        let total = product.plus(difference);

        compute_tree(&total);

        assert_eq!(total.left_output(), 19.0);
        assert_eq!(total.right_output(), 19.0);
    }

    #[test]
    fn test_compute_tree_diamond() {
        // The same node feeds both sides of the product: (2+1) * (2+1).
        let shared = Parameter::constant(2.0).plus(Parameter::constant(1.0));
        let squared = shared.scaled_by(shared.clone());

        compute_tree(&squared);

        assert_eq!(shared.left_output(), 3.0);
        assert_eq!(squared.left_output(), 9.0);
    }

    #[test]
    fn test_compute_tree_refreshes_engine_driven_leaf() {
        let engine_driven = Parameter::new();
        let scaled = engine_driven.scaled_by(Parameter::constant(2.0));

        engine_driven.set_value(5.0);
        compute_tree(&scaled);
        assert_eq!(scaled.left_output(), 10.0);

        engine_driven.set_value(-1.5);
        compute_tree(&scaled);
        assert_eq!(scaled.left_output(), -3.0);
    }

    #[test]
    fn test_teardown_tree() {
        let sum = Parameter::constant(1.0).plus(Parameter::constant(2.0));
        compute_tree(&sum);
        teardown_tree(&sum);
        // A second pass hits already-torn-down nodes and stays a no-op.
        teardown_tree(&sum);
        assert_eq!(sum.left_output(), 3.0);
    }
}
