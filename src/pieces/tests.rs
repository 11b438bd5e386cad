#[cfg(test)]
mod pieces_tests {
    mod split_tests {
        use crate::pieces::errors::AssemblyError;
        use crate::pieces::pieces::{piece_count, split};

        #[test]
        fn test_split_uneven_file() {
            let data = vec![1u8; 2500];
            let pieces = split(&data, 1024).unwrap();
            let lengths: Vec<usize> = pieces.iter().map(|p| p.data.len()).collect();
            let ordinals: Vec<u64> = pieces.iter().map(|p| p.ordinal).collect();
            assert_eq!(lengths, vec![1024, 1024, 452]);
            assert_eq!(ordinals, vec![0, 1, 2]);
        }

        #[test]
        fn test_split_exact_multiple() {
            let data = vec![2u8; 2048];
            let pieces = split(&data, 1024).unwrap();
            assert_eq!(pieces.len(), 2);
            assert_eq!(pieces[1].data.len(), 1024);
        }

        #[test]
        fn test_split_preserves_order() {
            let data: Vec<u8> = (0..10).collect();
            let pieces = split(&data, 3).unwrap();
            assert_eq!(pieces[0].data, vec![0, 1, 2]);
            assert_eq!(pieces[3].data, vec![9]);
        }

        #[test]
        fn test_split_empty_stream() {
            assert!(split(&[], 1024).unwrap().is_empty());
        }

        #[test]
        fn test_split_zero_chunk_size() {
            assert_eq!(split(&[1, 2, 3], 0), Err(AssemblyError::InvalidChunkSize));
        }

        #[test]
        fn test_piece_count() {
            assert_eq!(piece_count(2500, 1024), 3);
            assert_eq!(piece_count(2048, 1024), 2);
            assert_eq!(piece_count(1, 1024), 1);
            assert_eq!(piece_count(0, 1024), 0);
            assert_eq!(piece_count(10, 0), 0);
        }
    }

    mod reassemble_tests {
        use crate::pieces::errors::AssemblyError;
        use crate::pieces::pieces::{reassemble, reassemble_expected, split};
        use crate::pieces::structs::piece::Piece;

        #[test]
        fn test_reassemble_out_of_order() {
            let pieces = vec![
                Piece::new(2, vec![5]),
                Piece::new(0, vec![1, 2]),
                Piece::new(1, vec![3, 4]),
            ];
            assert_eq!(reassemble(pieces).unwrap(), vec![1, 2, 3, 4, 5]);
        }

        #[test]
        fn test_reassemble_gap_fails() {
            let pieces = vec![Piece::new(0, vec![1]), Piece::new(2, vec![3])];
            assert_eq!(reassemble(pieces), Err(AssemblyError::MissingPiece(1)));
        }

        #[test]
        fn test_reassemble_missing_first_fails() {
            let pieces = vec![Piece::new(1, vec![1])];
            assert_eq!(reassemble(pieces), Err(AssemblyError::MissingPiece(0)));
        }

        #[test]
        fn test_reassemble_duplicate_fails() {
            let pieces = vec![Piece::new(0, vec![1]), Piece::new(0, vec![1])];
            assert_eq!(reassemble(pieces), Err(AssemblyError::DuplicatePiece(0)));
        }

        #[test]
        fn test_reassemble_nothing() {
            assert_eq!(reassemble(Vec::new()).unwrap(), Vec::<u8>::new());
        }

        #[test]
        fn test_reassemble_expected_missing_tail() {
            let mut pieces = split(&vec![9u8; 2500], 1024).unwrap();
            pieces.pop();
            assert_eq!(reassemble_expected(pieces, 3), Err(AssemblyError::MissingPiece(2)));
        }

        #[test]
        fn test_reassemble_expected_unexpected_piece() {
            let pieces = split(&vec![9u8; 2500], 1024).unwrap();
            assert_eq!(
                reassemble_expected(pieces, 2),
                Err(AssemblyError::UnexpectedPiece { ordinal: 2, total: 2 })
            );
        }

        #[test]
        fn test_reassemble_expected_complete() {
            let data: Vec<u8> = (0..2500u32).map(|i| i as u8).collect();
            let pieces = split(&data, 1024).unwrap();
            assert_eq!(reassemble_expected(pieces, 3).unwrap(), data);
        }
    }

    mod property_tests {
        use proptest::prelude::*;
        use crate::pieces::pieces::{piece_count, reassemble, split};

        proptest! {
            #[test]
            fn prop_split_reassemble_round_trip(data in proptest::collection::vec(any::<u8>(), 0..4096), chunk_size in 1usize..2048) {
                let pieces = split(&data, chunk_size).unwrap();
                prop_assert_eq!(pieces.len() as u64, piece_count(data.len() as u64, chunk_size as u64));
                for piece in pieces.iter().take(pieces.len().saturating_sub(1)) {
                    prop_assert_eq!(piece.data.len(), chunk_size);
                }
                prop_assert_eq!(reassemble(pieces).unwrap(), data);
            }

            #[test]
            fn prop_reassemble_ignores_input_order(data in proptest::collection::vec(any::<u8>(), 1..2048), chunk_size in 1usize..256) {
                let mut pieces = split(&data, chunk_size).unwrap();
                pieces.reverse();
                prop_assert_eq!(reassemble(pieces).unwrap(), data);
            }
        }
    }
}
