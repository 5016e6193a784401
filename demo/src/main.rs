use async_graphql::Request;
use bestiary_application::context::AppContext;
use bestiary_graphql::{BestiaryConfig, bootstrap};
use tracing_subscriber::EnvFilter;

const SCRIPT: &[(&str, &str)] = &[
    ("list", "{ beastList { id name otherNames } }"),
    (
        "lookup",
        r#"{ beast(name: "Sasquatch") { id name description otherNames imageUrl } }"#,
    ),
    (
        "miss",
        r#"{ beast(name: "Jackalope") { id name description otherNames imageUrl } }"#,
    ),
    (
        "add",
        r#"mutation { addBeast(name: "Jersey Devil", description: "A winged biped of the Pine Barrens", otherNames: ["Leeds Devil"]) { id name otherNames } }"#,
    ),
    (
        "update",
        r#"mutation { updateBeast(id: 4, imageUrl: "https://example.com/mothman.png") { id name imageUrl } }"#,
    ),
    (
        "update-miss",
        r#"mutation { updateBeast(id: 99999, name: "Ghost") { id name } }"#,
    ),
    ("list-after", "{ beastList { id name imageUrl } }"),
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BestiaryConfig::from_env()?;
    let (schema, report) = bootstrap(&config)?;
    tracing::info!(seed = %config.seed_path.display(), ?report, "bestiary schema ready");

    if std::env::args().any(|arg| arg == "--sdl") {
        println!("{}", schema.sdl());
        return Ok(());
    }

    for (label, query) in SCRIPT {
        let request = Request::new(*query).data(AppContext::with_request_id(*label));
        let response = schema.execute(request).await;
        println!("# {label}");
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
