use anyhow::Result as AnyResult;
use bestiary_application::BeastServices;
use bestiary_application::beast::{AddBeast, BeastDto, GetBeastByName, ListBeasts, UpdateBeast};
use bestiary_application::command_bus::CommandBus;
use bestiary_application::context::AppContext;
use bestiary_application::query_bus::QueryBus;
use bestiary_domain::persist::{InMemoryBeastStore, SharedBeastRepository};
use bestiary_domain::{Beast, BeastPatch};
use std::sync::Arc;

fn services_with(beasts: Vec<Beast>) -> AnyResult<BeastServices> {
    let repo: SharedBeastRepository = Arc::new(InMemoryBeastStore::with_beasts(beasts, 5));
    Ok(BeastServices::new(repo)?)
}

fn chupacabra() -> Beast {
    Beast::builder()
        .id(3)
        .name("Chupacabra")
        .description("Goat sucker")
        .other_names(vec!["El Chupacabras".to_string()])
        .image_url("chupa.png")
        .build()
}

fn add(name: &str, description: &str) -> AddBeast {
    AddBeast {
        name: name.into(),
        description: description.into(),
        other_names: None,
        image_url: None,
    }
}

#[tokio::test]
async fn add_assigns_strictly_increasing_ids() -> AnyResult<()> {
    let services = services_with(vec![])?;
    let ctx = AppContext::default();

    let mut ids = Vec::new();
    for i in 0..5 {
        let dto = services
            .command_bus()
            .dispatch(&ctx, add(&format!("beast-{i}"), "d"))
            .await?;
        ids.push(dto.id);
    }
    assert_eq!(ids, vec![6, 7, 8, 9, 10]);
    Ok(())
}

#[tokio::test]
async fn read_your_write() -> AnyResult<()> {
    let services = services_with(vec![chupacabra()])?;
    let ctx = AppContext::with_request_id("rw-1");

    let created = services.command_bus().dispatch(&ctx, add("X", "Y")).await?;
    assert_eq!(created.id, 6);

    let found = services
        .query_bus()
        .dispatch(
            &ctx,
            GetBeastByName {
                name: Some("X".into()),
            },
        )
        .await?;
    assert_eq!(found, created);

    let list = services.query_bus().dispatch(&ctx, ListBeasts).await?;
    assert_eq!(list.0.len(), 2);
    assert_eq!(list.0.last(), Some(&created));
    Ok(())
}

#[tokio::test]
async fn partial_update_changes_only_supplied_fields() -> AnyResult<()> {
    let services = services_with(vec![chupacabra()])?;
    let ctx = AppContext::default();

    let updated = services
        .command_bus()
        .dispatch(
            &ctx,
            UpdateBeast {
                id: 3,
                patch: BeastPatch::builder().description("new").build(),
            },
        )
        .await?;

    assert_eq!(
        updated,
        BeastDto {
            id: 3,
            name: "Chupacabra".into(),
            description: "new".into(),
            other_names: vec!["El Chupacabras".into()],
            image_url: "chupa.png".into(),
        }
    );
    Ok(())
}

#[tokio::test]
async fn empty_patch_returns_record_unchanged() -> AnyResult<()> {
    let services = services_with(vec![chupacabra()])?;
    let ctx = AppContext::default();

    let updated = services
        .command_bus()
        .dispatch(
            &ctx,
            UpdateBeast {
                id: 3,
                patch: BeastPatch::default(),
            },
        )
        .await?;
    assert_eq!(updated, BeastDto::from(chupacabra()));
    Ok(())
}

#[tokio::test]
async fn lookup_misses_return_placeholder() -> AnyResult<()> {
    let services = services_with(vec![chupacabra()])?;
    let ctx = AppContext::default();

    let by_name = services
        .query_bus()
        .dispatch(
            &ctx,
            GetBeastByName {
                name: Some("nonexistent".into()),
            },
        )
        .await?;
    assert_eq!(by_name, BeastDto::placeholder());

    let no_name = services
        .query_bus()
        .dispatch(&ctx, GetBeastByName::default())
        .await?;
    assert_eq!(no_name, BeastDto::placeholder());

    let update_miss = services
        .command_bus()
        .dispatch(
            &ctx,
            UpdateBeast {
                id: 99999,
                patch: BeastPatch::builder().name("ghost").build(),
            },
        )
        .await?;
    assert_eq!(update_miss, BeastDto::placeholder());

    // 未命中的更新不影响已有记录
    let list = services.query_bus().dispatch(&ctx, ListBeasts).await?;
    assert_eq!(list.0[0].name, "Chupacabra");
    Ok(())
}

#[tokio::test]
async fn add_keeps_optional_fields() -> AnyResult<()> {
    let services = services_with(vec![])?;
    let created = services
        .command_bus()
        .dispatch(
            &AppContext::default(),
            AddBeast {
                name: "Jersey Devil".into(),
                description: "Pine Barrens".into(),
                other_names: Some(vec!["Leeds Devil".into()]),
                image_url: Some("jd.png".into()),
            },
        )
        .await?;

    assert_eq!(created.other_names, vec!["Leeds Devil".to_string()]);
    assert_eq!(created.image_url, "jd.png");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_never_share_an_id() -> AnyResult<()> {
    let services = Arc::new(services_with(vec![])?);

    let mut handles = Vec::new();
    for i in 0..50 {
        let services = services.clone();
        handles.push(tokio::spawn(async move {
            services
                .command_bus()
                .dispatch(&AppContext::default(), add(&format!("b{i}"), "d"))
                .await
        }));
    }

    let mut ids = Vec::new();
    for h in handles {
        ids.push(h.await??.id);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 50);
    assert_eq!(ids.first(), Some(&6));
    assert_eq!(ids.last(), Some(&55));
    Ok(())
}
