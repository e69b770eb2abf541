// Dashboard handlers (d100)
pub mod d100_transaction_trends;
