//! Pagination constants and helpers shared by list and search queries.
//!
//! Lives in `core` (zero internal deps) so both the repository layer
//! and any future tooling clamp the same way.

/// Default number of list results per page.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum number of list results per page.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp an optional caller-supplied limit into `1..=max`, falling back
/// to `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).clamp(1, max)
}

/// Clamp an optional caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_absent() {
        assert_eq!(
            clamp_limit(None, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
            DEFAULT_LIST_LIMIT
        );
    }

    #[test]
    fn clamp_limit_caps_at_max() {
        assert_eq!(
            clamp_limit(Some(10_000), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT),
            MAX_LIST_LIMIT
        );
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
        assert_eq!(clamp_limit(Some(-5), DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT), 1);
    }

    #[test]
    fn clamp_offset_floors_at_zero() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-1)), 0);
        assert_eq!(clamp_offset(Some(25)), 25);
    }
}
