use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "tas.pest"]
pub struct TasParser;
