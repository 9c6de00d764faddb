/// Round to two decimal places, half away from zero.
///
/// Serialized percentage output uses this fixed precision so that
/// re-serializing previously serialized markup is byte-stable.
pub(crate) fn round_hundredths(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
