//! Concurrent access to a shared factory.

mod common;

use common::{content_driver, CountingDriver};
use ormap_core::ClassMetadataFactory;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_concurrent_requests_resolve_once() {
    let driver = content_driver();
    let hierarchy = driver.hierarchy();
    let factory = ClassMetadataFactory::new(CountingDriver::new(driver), hierarchy);
    let barrier = Barrier::new(THREADS);

    let results: Vec<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    barrier.wait();
                    factory.get_metadata_for("FeatureArticle").unwrap()
                })
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(factory.driver().calls_for("FeatureArticle"), 1);
    assert_eq!(factory.driver().calls_for("Article"), 1);
    assert_eq!(factory.driver().calls_for("Content"), 1);
    assert!(results.iter().all(|m| Arc::ptr_eq(m, &results[0])));
    assert_eq!(factory.loaded_class_names().len(), 3);
    assert_eq!(factory.stats().misses(), 1);
    assert_eq!(factory.stats().hits(), (THREADS - 1) as u64);
}

#[test]
fn test_concurrent_requests_for_overlapping_chains() {
    let driver = content_driver();
    let hierarchy = driver.hierarchy();
    let factory = ClassMetadataFactory::new(CountingDriver::new(driver), hierarchy);
    let classes = ["Content", "Article", "FeatureArticle", "UserProfile"];
    let barrier = Barrier::new(classes.len() * 2);

    thread::scope(|s| {
        for class in classes.iter().chain(classes.iter()) {
            let factory = &factory;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                factory.get_metadata_for(class).unwrap();
            });
        }
    });

    for class in classes {
        assert_eq!(factory.driver().calls_for(class), 1, "driver calls for {}", class);
    }
    assert_eq!(factory.driver().total_calls(), classes.len());
}
