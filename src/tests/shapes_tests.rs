#![warn(clippy::all, clippy::pedantic)]

#[cfg(test)]
mod tests {
    use crate::components::PieceKind;
    use crate::shapes::mask;

    #[test]
    fn test_every_state_has_four_cells() {
        for kind in PieceKind::ALL {
            for rotation in 0..4 {
                assert_eq!(
                    mask(kind, rotation).filled_count(),
                    4,
                    "{kind:?} rotation {rotation} should have 4 cells"
                );
            }
        }
    }

    #[test]
    fn test_o_piece_never_changes() {
        let first = mask(PieceKind::O, 0);
        for rotation in 1..4 {
            assert_eq!(mask(PieceKind::O, rotation), first);
        }
    }

    #[test]
    fn test_two_state_pieces_repeat() {
        for kind in [PieceKind::I, PieceKind::S, PieceKind::Z] {
            assert_eq!(mask(kind, 0), mask(kind, 2), "{kind:?}");
            assert_eq!(mask(kind, 1), mask(kind, 3), "{kind:?}");
            assert_ne!(mask(kind, 0), mask(kind, 1), "{kind:?}");
        }
    }

    #[test]
    fn test_four_state_pieces_are_distinct() {
        for kind in [PieceKind::J, PieceKind::L, PieceKind::T] {
            for a in 0..4 {
                for b in (a + 1)..4 {
                    assert_ne!(mask(kind, a), mask(kind, b), "{kind:?} {a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_t_piece_layout() {
        // ###
        //  #
        let cells: Vec<_> = mask(PieceKind::T, 0).cells().collect();
        assert_eq!(cells, vec![(0, 0), (1, 0), (2, 0), (1, 1)]);
    }

    #[test]
    fn test_i_piece_layouts() {
        let horizontal: Vec<_> = mask(PieceKind::I, 0).cells().collect();
        assert_eq!(horizontal, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

        let vertical: Vec<_> = mask(PieceKind::I, 1).cells().collect();
        assert_eq!(vertical, vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_is_filled_uses_col_then_row() {
        // J rotation 0:
        // ###
        //   #
        let j = mask(PieceKind::J, 0);
        assert!(j.is_filled(2, 1));
        assert!(!j.is_filled(1, 2));
        assert!(!j.is_filled(4, 0), "Outside the box is empty");
        assert!(!j.is_filled(0, 4), "Outside the box is empty");
    }

    #[test]
    fn test_rotation_wraps() {
        assert_eq!(mask(PieceKind::T, 5), mask(PieceKind::T, 1));
        assert_eq!(mask(PieceKind::L, 8), mask(PieceKind::L, 0));
    }

    #[test]
    fn test_bottom_cells_skip_cells_resting_on_the_piece() {
        let bottom: Vec<_> = mask(PieceKind::T, 0).bottom_cells().collect();
        assert_eq!(bottom, vec![(0, 0), (2, 0), (1, 1)]);

        let vertical: Vec<_> = mask(PieceKind::I, 1).bottom_cells().collect();
        assert_eq!(vertical, vec![(1, 3)]);
    }
}
