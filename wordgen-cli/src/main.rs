use wordgen_core::model::generator::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Number of words to print; first argument, 50 if omitted
    let count: usize = match std::env::args().nth(1) {
        Some(raw) => raw.parse()?,
        None => 50,
    };

    // Load the model files from the "data" directory
    // Loads automatically model.bin if existing
    let generator = Generator::new("./data")?;

    let mut rng = rand::rng();
    for word in generator.generate_batch(count, &mut rng)? {
        println!("{word}");
    }

    Ok(())
}
