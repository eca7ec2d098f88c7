use super::*;

/// Tests that rotes are listed alphabetically by name.
///
/// Expected: Ok with rotes ordered by name regardless of insertion order
#[tokio::test]
async fn returns_rotes_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rote::RoteFactory::new(db).name("Mind Shield").build().await?;
    factory::rote::RoteFactory::new(db).name("Call Lightning").build().await?;
    factory::rote::RoteFactory::new(db).name("Healing Touch").build().await?;

    let repo = RoteRepository::new(db);
    let rotes = repo.get_all(RoteFilter::default()).await?;

    let names: Vec<_> = rotes.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Call Lightning", "Healing Touch", "Mind Shield"]);

    Ok(())
}

/// Tests filtering by tradition.
///
/// Expected: Ok with only rotes of the requested tradition
#[tokio::test]
async fn filters_by_tradition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rote::RoteFactory::new(db).tradition("Verbena").build().await?;
    factory::rote::RoteFactory::new(db).tradition("Akashic Brotherhood").build().await?;

    let repo = RoteRepository::new(db);
    let rotes = repo
        .get_all(RoteFilter {
            tradition: Some("Verbena".to_string()),
            sphere: None,
        })
        .await?;

    assert_eq!(rotes.len(), 1);
    assert_eq!(rotes[0].tradition, "Verbena");

    Ok(())
}

/// Tests filtering by a sphere mentioned anywhere in the sphere requirements.
///
/// Expected: Ok with rotes whose spheres contain the requested sphere
#[tokio::test]
async fn filters_by_sphere_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rote::RoteFactory::new(db).spheres("Forces 2, Prime 1").build().await?;
    factory::rote::RoteFactory::new(db).spheres("Prime 2").build().await?;
    factory::rote::RoteFactory::new(db).spheres("Mind 1").build().await?;

    let repo = RoteRepository::new(db);
    let rotes = repo
        .get_all(RoteFilter {
            tradition: None,
            sphere: Some("Prime".to_string()),
        })
        .await?;

    assert_eq!(rotes.len(), 2);
    assert!(rotes.iter().all(|r| r.spheres.contains("Prime")));

    Ok(())
}

/// Tests that `LIKE` wildcards in the sphere filter match only themselves.
///
/// Expected: Ok with no rotes for `%` or `_`, and only the rote containing a literal `%`
#[tokio::test]
async fn sphere_filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Rote)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::rote::RoteFactory::new(db).spheres("Forces 3").build().await?;
    factory::rote::RoteFactory::new(db).spheres("Mind 1").build().await?;

    let repo = RoteRepository::new(db);
    for wildcard in ["%", "_", "Forces_3"] {
        let rotes = repo
            .get_all(RoteFilter {
                tradition: None,
                sphere: Some(wildcard.to_string()),
            })
            .await?;
        assert!(rotes.is_empty(), "{} matched {} rotes", wildcard, rotes.len());
    }

    factory::rote::RoteFactory::new(db).spheres("Prime 100%").build().await?;

    let rotes = repo
        .get_all(RoteFilter {
            tradition: None,
            sphere: Some("%".to_string()),
        })
        .await?;
    assert_eq!(rotes.len(), 1);
    assert_eq!(rotes[0].spheres, "Prime 100%");

    Ok(())
}
