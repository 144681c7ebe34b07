use crate::promoter::Element;
use std::fmt;

/// ANSI terminal styles used to highlight motif bases.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Color {
    Red,
    Blue,
    Bold,
    Reset,
}

pub fn pick_color(element: Element) -> Color {
    match element {
        Element::Minus35 => Color::Red,
        Element::Minus10 => Color::Blue,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(formatter, "\x1b[31m"),
            Color::Blue => write!(formatter, "\x1b[34m"),
            Color::Bold => write!(formatter, "\x1b[1m"),
            Color::Reset => write!(formatter, "\x1b[0m"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_get_distinct_colors() {
        assert_ne!(
            pick_color(Element::Minus35),
            pick_color(Element::Minus10)
        );
    }

    #[test]
    fn escape_codes() {
        assert_eq!(Color::Red.to_string(), "\x1b[31m");
        assert_eq!(Color::Reset.to_string(), "\x1b[0m");
    }
}
