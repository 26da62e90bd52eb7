use pathviz_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> u32 {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(0, 0);
        let b = Position::new(4, 3);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
        assert_eq!(manhattan(Position::new(-2, 1), Position::new(2, -1)), 6);
    }
}
