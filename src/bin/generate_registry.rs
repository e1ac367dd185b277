use registry_codegen::{render, ADDITIONAL_TOKENS};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!(
        "rendering registry blocks for {} additional tokens",
        ADDITIONAL_TOKENS.len()
    );

    println!("Generating additional tokens for Rust token registry...");

    let code = render(ADDITIONAL_TOKENS)?;
    println!("{}", code);

    println!("\nAdd this code to the initialize_defi_tokens() function in token_registry.rs");

    Ok(())
}
