/// Prefix of the cells holding literal operands (`Const5`).
pub const CONSTANT_PREFIX: &str = "Const";

/// Prefix of the cell holding a loop's exclusive upper bound (`Fori`).
pub const LOOP_BOUND_PREFIX: &str = "For";

/// Cell holding the constant 1, shared by loop increments and the multiplication loop.
pub const ONE: &str = "One";

/// Multiplication subroutine entry cell; holds the return address after `JnS`.
pub const MULT_RETURN: &str = "MultReturn";
/// Multiplication loop label.
pub const MULT_LOOP: &str = "Mult";
/// Multiplicand.
pub const MULT_A: &str = "MultA";
/// Multiplier, decremented to zero.
pub const MULT_B: &str = "MultB";
/// Product.
pub const MULT_RESULT: &str = "MultResult";

/// Cells owned by the generated code; programs may not assign them.
pub const RESERVED_CELLS: [&str; 6] = [ONE, MULT_RETURN, MULT_LOOP, MULT_A, MULT_B, MULT_RESULT];
