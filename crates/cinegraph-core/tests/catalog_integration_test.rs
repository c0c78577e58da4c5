//! Catalog integration tests against both store backends

use cinegraph_core::store::{self, StoreConfig};
use cinegraph_core::{Catalog, EntityId, NewDirector, NewMovie};
use std::collections::HashSet;
use tempfile::TempDir;

fn open_catalog(config: &StoreConfig) -> Catalog {
    Catalog::new(store::open(config).expect("store should open"))
}

async fn exercise(catalog: &Catalog) {
    let nolan = catalog
        .add_director(NewDirector {
            name: "Christopher Nolan".into(),
            age: 52,
        })
        .await
        .unwrap();

    let interstellar = catalog
        .add_movie(NewMovie {
            name: "Interstellar".into(),
            genre: "Sci-Fi".into(),
            director_id: Some(nolan.id),
        })
        .await
        .unwrap();

    let dangling = catalog
        .add_movie(NewMovie {
            name: "Lost Reel".into(),
            genre: "Drama".into(),
            director_id: Some(EntityId::new()),
        })
        .await
        .unwrap();

    let movie = catalog.movie(&interstellar.id).await.unwrap().unwrap();
    let director = catalog.director_of(&movie).await.unwrap().unwrap();
    assert_eq!(director.name, "Christopher Nolan");
    assert_eq!(director.age, 52);

    assert!(catalog.director_of(&dangling).await.unwrap().is_none());
    assert!(catalog.movie(&EntityId::new()).await.unwrap().is_none());

    let ids: HashSet<_> = catalog
        .movies()
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.id)
        .collect();
    assert_eq!(ids, HashSet::from([interstellar.id, dangling.id]));

    assert_eq!(catalog.movies_by(&nolan).await.unwrap(), vec![interstellar]);
}

#[tokio::test]
async fn test_memory_backend() {
    let catalog = open_catalog(&StoreConfig::Memory);
    assert_eq!(catalog.backend(), "memory");
    exercise(&catalog).await;
}

#[tokio::test]
async fn test_lmdb_backend() {
    let dir = TempDir::new().unwrap();
    let url = format!("lmdb://{}?map_size=16777216", dir.path().display());
    let catalog = open_catalog(&StoreConfig::parse(&url).unwrap());
    assert_eq!(catalog.backend(), "lmdb");
    exercise(&catalog).await;
    catalog.flush().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_are_independent() {
    let dir = TempDir::new().unwrap();
    let catalog = open_catalog(&StoreConfig::Lmdb {
        path: dir.path().to_path_buf(),
        map_size: 16 * 1024 * 1024,
    });

    let director = catalog
        .add_director(NewDirector {
            name: "Hayao Miyazaki".into(),
            age: 83,
        })
        .await
        .unwrap();

    let director_id = director.id;
    let mut handles = Vec::new();
    for i in 0..32 {
        let catalog = catalog.clone();
        handles.push(tokio::spawn(async move {
            catalog
                .add_movie(NewMovie {
                    name: format!("Film {i}"),
                    genre: "Animation".into(),
                    director_id: Some(director_id),
                })
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(catalog.movies_by(&director).await.unwrap().len(), 32);
    assert_eq!(catalog.movies().await.unwrap().len(), 32);
}
