pub mod datecalc;
pub mod flightsearch;
