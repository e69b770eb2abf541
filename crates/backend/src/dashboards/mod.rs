pub mod d100_transaction_trends;
