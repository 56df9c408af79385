pub mod d400_population;
pub mod d401_competitiveness;
pub mod d402_quarterly_finance;
