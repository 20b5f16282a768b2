use std::path::Path;

use env_logger::Env;
use log::warn;
use pokemate_core::{Corpus, MultiGramModel, NameGenerator, SamplingOptions};

const CORPUS_PATH: &str = "./data/names.txt";
const MODEL_PATH: &str = "./data/model.bin";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // The server only reads the model artifact, build it here if needed
    if !Path::new(MODEL_PATH).exists() {
        let corpus = Corpus::load(CORPUS_PATH)?;
        MultiGramModel::train(corpus.names())?.save(MODEL_PATH)?;
    }

    let options = SamplingOptions {
        // Number of retries if the generated name is already in the corpus
        nb_try: 100,
        // Maximum n-gram size to consider during generation (0 = no limit)
        max_n: 0,
        // Probability of falling back to a random, shorter n-gram at each step
        randomness: 0.1,
        ..Default::default()
    };

    let generator = NameGenerator::with_options(MODEL_PATH, CORPUS_PATH, options)?;

    // Amounts outside [1, 10] are rejected
    match generator.generate_names(11) {
        Ok(_) => println!("Should not happen"),
        Err(e) => warn!("11 names is too many: {e}"),
    }
    match generator.generate_names("string input") {
        Ok(_) => println!("Should not happen"),
        Err(e) => warn!("'string input' is not an amount: {e}"),
    }

    // The amount can be given as the first argument, defaults to 10
    let amount = std::env::args().nth(1).unwrap_or_else(|| "10".to_owned());
    for (i, name) in generator.generate_names(amount.as_str())?.iter().enumerate() {
        println!("Generated name {}: {}", i + 1, name);
    }

    Ok(())
}
