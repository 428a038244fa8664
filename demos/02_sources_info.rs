use newsapi_rs::{ALL, NewsClient, SourcesInfo};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = NewsClient::from_env()?;

    // A single field flattens to one value per source.
    if let SourcesInfo::Values(ids) = client.sources_info("id", ALL, "en", "gb")? {
        println!("--- Source ids in the UK ---");
        for id in ids {
            println!("  {id}");
        }
        println!();
    }

    // Several fields keep one map per source.
    let records = client
        .sources_info(["id", "name", "url"], "general", ALL, "us")?
        .into_records()
        .unwrap_or_default();
    println!("--- General US sources ---");
    for r in records {
        println!("  {}", serde_json::to_string(&r)?);
    }

    Ok(())
}
