//! Input normalization: substitute defaults for garbage, clamp into range.

use sw_core::config::InputTable;
use sw_core::{InputField, InputSet, InputSpec, RawInput};

/// Clamp `raw` into `[spec.min, spec.max]`, or fall back to `spec.default`
/// when it is not numeric.
pub fn normalize(raw: &RawInput, spec: &InputSpec) -> i32 {
    match raw.as_integer() {
        Some(v) => v.max(spec.min as i64).min(spec.max as i64) as i32,
        None => spec.default,
    }
}

/// Normalize all four inputs, each against its own spec.
pub fn normalize_all(mut read: impl FnMut(InputField) -> RawInput, inputs: &InputTable) -> InputSet {
    let mut set = defaults(inputs);
    for field in InputField::ALL {
        set.set(field, normalize(&read(field), inputs.get(field)));
    }
    set
}

/// The input set every widget starts from.
pub fn defaults(inputs: &InputTable) -> InputSet {
    InputSet::new(
        inputs.duration.default,
        inputs.temperature.default,
        inputs.intensity.default,
        inputs.humidity.default,
    )
}
