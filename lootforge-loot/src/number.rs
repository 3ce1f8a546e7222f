use serde::Serialize;

/// Either a fixed amount or a uniformly sampled interval.
///
/// Used for roll counts, stack sizes and durability damage alike. The
/// engine tells the two apart by shape alone: `Constant` serializes as
/// a bare number, `Uniform` as a `min`/`max` object. `min <= max` is
/// the caller's responsibility.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
#[serde(untagged)]
pub enum NumberProvider {
    Constant(i32),
    Uniform { min: f32, max: f32 },
}

impl NumberProvider {
    pub fn constant(value: i32) -> Self {
        Self::Constant(value)
    }

    pub fn uniform(min: f32, max: f32) -> Self {
        Self::Uniform { min, max }
    }
}

impl Default for NumberProvider {
    fn default() -> Self {
        Self::Constant(1)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn to_json(provider: NumberProvider) -> Value {
        serde_json::from_str(&serde_json::to_string(&provider).unwrap()).unwrap()
    }

    #[test]
    fn constant_is_a_bare_number() {
        assert_eq!(to_json(NumberProvider::constant(1)), json!(1));
        assert_eq!(to_json(NumberProvider::constant(42)), json!(42));
    }

    #[test]
    fn uniform_is_a_min_max_object() {
        let value = to_json(NumberProvider::uniform(0.05, 0.2));
        assert_eq!(value, json!({"min": 0.05, "max": 0.2}));
    }

    #[test]
    fn default_rolls_once() {
        assert_eq!(NumberProvider::default(), NumberProvider::Constant(1));
    }
}
