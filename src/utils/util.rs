pub type Result<T> = std::result::Result<T, String>;

pub fn handle_error_and_exit(err: String) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}

/// Fraction of `part` in `total`, `None` when there is nothing to divide by.
pub fn fraction(part: usize, total: usize) -> Option<f64> {
    match total {
        0 => None,
        _ => Some(part as f64 / total as f64),
    }
}

#[cfg(test)]
mod tests {
    use super::fraction;

    #[test]
    fn fraction_of_empty_total_is_none() {
        assert_eq!(fraction(0, 0), None);
    }

    #[test]
    fn fraction_of_nonempty_total() {
        assert_eq!(fraction(1, 4), Some(0.25));
        assert_eq!(fraction(0, 3), Some(0.0));
    }
}
