#[allow(non_snake_case)]
pub mod Chemistry;
#[allow(non_snake_case)]
pub mod Examples;

use Examples::chem_examples::chem_examples;
use simplelog::{Config, LevelFilter, SimpleLogger};

pub fn main() {
    SimpleLogger::init(LevelFilter::Info, Config::default()).unwrap();
    let task: usize = 1;
    chem_examples(task);
}
