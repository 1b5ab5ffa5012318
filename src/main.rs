//! # Siren Person Demo
//!
//! Seeds the person store and prints the Siren documents a hypermedia API would serve:
//! the root, the collection, a single person, a page and a freshly inserted person.
//!
//! Set `SIREN_RENDER_TEMPLATED_LINKS=AS_LINK` to see templated links rendered as links
//! instead of actions.

use hateoas_siren::lifecycle::{setup_tracing, PersonSystem};
use hateoas_siren::person::PageRequest;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting Siren person demo");

    let system = PersonSystem::new().map_err(|e| e.to_string())?;
    system.seed().await.map_err(|e| e.to_string())?;

    println!("GET /\n{}\n", system.render_root().map_err(|e| e.to_string())?);

    let span = tracing::info_span!("render_collection");
    let all = async { system.render_all().await.map_err(|e| e.to_string()) }
        .instrument(span)
        .await?;
    println!("GET /persons\n{all}\n");

    match system.render_one(1).await.map_err(|e| e.to_string())? {
        Some(document) => println!("GET /persons/1\n{document}\n"),
        None => warn!(id = 1, "Person not found"),
    }

    let page = system
        .render_page(PageRequest::new(0, 2))
        .await
        .map_err(|e| e.to_string())?;
    println!("GET /persons?page=0&size=2\n{page}\n");

    let created = system
        .insert_json(r#"{"name":"Dave","age":30}"#)
        .await
        .map_err(|e| e.to_string())?;
    println!("POST /persons\n{created}\n");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Demo completed successfully");
    Ok(())
}
