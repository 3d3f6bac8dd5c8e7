use game_catalog_api::services::documentation;

fn main() -> anyhow::Result<()> {
    let doc = documentation::openapi();
    println!("{}", doc.to_pretty_json()?);
    Ok(())
}
