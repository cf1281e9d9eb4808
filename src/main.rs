//! Prints the growth comparison table for the default input sizes, followed by the "efficiency wall".
//! Takes no arguments.

use big_o_growth::{
    configs::{DEFAULT_INPUT_SIZES, EFFICIENCY_WALL_N},
    compare,
    GrowthError,
    InputSizeSet,
    OUTPUT,
};

fn main() -> Result<(), GrowthError> {
    let sizes = InputSizeSet::new(DEFAULT_INPUT_SIZES.to_vec())?;
    let report = compare(&sizes, EFFICIENCY_WALL_N);
    OUTPUT(&report.to_string());
    Ok(())
}
