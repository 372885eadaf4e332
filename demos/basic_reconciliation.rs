//! Basic reconciliation example

use trade_recon::utils::MemorySource;
use trade_recon::{ReconciliationEngine, Record};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔎 Trade Recon - Basic Reconciliation Example\n");

    // 1. Each counterparty's view of the same business
    let client1 = MemorySource::new("client1", Vec::new())
        .with_record(Record::trade(
            "client1".to_string(),
            "ABC98765".to_string(),
            "HK345675432".to_string(),
            3000,
        ))
        .with_record(Record::trade(
            "client1".to_string(),
            "ABC98770".to_string(),
            "US0378331005".to_string(),
            500,
        ))
        .with_record(Record::return_of(
            "client1".to_string(),
            "ABC98771".to_string(),
            "US0378331005".to_string(),
            400,
            Some("ABC98770".to_string()),
        ));

    let client2 = MemorySource::new("client2", Vec::new())
        .with_record(Record::trade(
            "client2".to_string(),
            "ABC98765".to_string(),
            "HK345675432".to_string(),
            3000,
        ))
        .with_record(Record::return_of(
            "client2".to_string(),
            "ABC98766".to_string(),
            "HK345675432".to_string(),
            2000,
            Some("ABC98765".to_string()),
        ))
        .with_record(Record::trade(
            "client2".to_string(),
            "XYZ00010".to_string(),
            "US0378331005".to_string(),
            500,
        ))
        .with_record(Record::return_of(
            "client2".to_string(),
            "XYZ00011".to_string(),
            "US0378331005".to_string(),
            350,
            Some("XYZ00010".to_string()),
        ));

    println!("📥 Loaded {} records for client1", client1.records().len());
    println!("📥 Loaded {} records for client2\n", client2.records().len());

    // 2. Reconcile both directions
    let engine = ReconciliationEngine::new();
    let report = engine.run(&client1, &client2)?;

    println!("🧾 Run {} at {}", report.run_id, report.generated_at);
    if report.is_clean() {
        println!("  ✓ No discrepancies found");
        return Ok(());
    }

    // 3. Show what each side needs to fix
    for client in [&report.left_client, &report.right_client] {
        let issues: Vec<_> = report.discrepancies_for(client).collect();
        println!("\n⚠️  {} ({} issues)", client, issues.len());
        for discrepancy in issues {
            println!("  - {}", discrepancy);
        }
    }

    // 4. The plain report, as the CLI prints it
    println!("\n📄 Report:");
    report.write_to(std::io::stdout().lock())?;

    Ok(())
}
