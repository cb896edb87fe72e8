use bounty_chains::{build_report, ChainRegistry, Token};

fn main() {
    println!("🧪 Wallet Token Report Walkthrough");
    println!("==================================\n");

    let registry = ChainRegistry::with_defaults();
    println!("🔗 Supported chains: {}", registry.len());
    for label in registry.labels() {
        println!("   {} -> {}", label, registry.platform_id(label).unwrap_or("?"));
    }

    let tokens = vec![
        Token::new(
            "Tether",
            "USDT",
            "0xfd086bc7cd5c481dcc9c85ebe478a1c0b69fcbb9",
            Some("arbitrum"),
        ),
        Token::new(
            "Ether",
            "ETH",
            "0x0000000000000000000000000000000000000000",
            Some("ethereum"),
        ),
        Token::new(
            "Wrapped SOL",
            "WSOL",
            "So11111111111111111111111111111111111111112",
            Some("Solana"),
        ),
        Token::new("Mystery", "MYS", "0x123", Some("unknown-chain")),
        Token::new("Nameless", "N", "0xabc", None),
    ];

    println!("\n📋 Processing {} token(s)...", tokens.len());
    let report = build_report(&registry, &tokens);

    let summary = &report.partition.summary;
    println!("\n📊 Summary");
    println!("   total:       {}", summary.total_tokens);
    println!("   priceable:   {}", summary.valid_tokens);
    println!("   unsupported: {}", summary.unsupported_tokens);

    if !report.partition.unsupported_chains.is_empty() {
        println!(
            "\n❌ Unsupported chains: {}",
            report.partition.unsupported_chains.join(", ")
        );
    }

    println!("\n🔍 Per-chain breakdown");
    for chain in &report.chains {
        println!(
            "   {} (supported: {}, valid: {}, invalid: {}, warnings: {})",
            chain.chain,
            chain.info.is_supported,
            chain.addresses.valid.len(),
            chain.addresses.invalid.len(),
            chain.addresses.warnings.len(),
        );
        if let Some(suggestions) = &chain.info.suggestions {
            if !suggestions.is_empty() {
                println!("      did you mean: {}", suggestions.join(", "));
            }
        }
    }

    println!("\n💡 Recommendations");
    for line in &report.recommendations {
        println!("   - {line}");
    }
}
