use offer_studio::targeting::{
    build_targeting_strategy, quality_score, FunnelStage, LookalikeAudience, SeedSource,
    DEFAULT_MARKET_POPULATION,
};

#[test]
fn each_stage_builds_its_recommended_tiers() {
    let expected = [
        (FunnelStage::Awareness, vec![5, 6, 7, 8, 9, 10]),
        (FunnelStage::Consideration, vec![3, 4, 5]),
        (FunnelStage::Conversion, vec![1, 2]),
        (FunnelStage::Retention, vec![1]),
    ];

    for (stage, percentages) in expected {
        let strategy = build_targeting_strategy(
            stage,
            SeedSource::CustomerList,
            20_000,
            DEFAULT_MARKET_POPULATION,
        );
        let actual: Vec<u8> = strategy.lookalikes.iter().map(|a| a.percentage).collect();
        assert_eq!(actual, percentages, "{stage:?}");
        assert_eq!(strategy.messaging_angle, stage.messaging_angle());
    }
}

#[test]
fn best_lookalike_is_the_tightest_tier() {
    let strategy = build_targeting_strategy(
        FunnelStage::Awareness,
        SeedSource::WebsiteVisitors,
        3_000,
        DEFAULT_MARKET_POPULATION,
    );

    let best = strategy.best_lookalike().expect("tiers present");
    assert_eq!(best.percentage, 5);
    assert_eq!(strategy.total_reach(), 23_000_000);
}

#[test]
fn quality_stays_within_unit_interval() {
    let sources = [
        SeedSource::CustomerList,
        SeedSource::HighValueCustomers,
        SeedSource::Purchasers,
        SeedSource::LeadFormSubmitters,
        SeedSource::AppUsers,
        SeedSource::WebsiteVisitors,
        SeedSource::PageEngagers,
        SeedSource::VideoViewers,
    ];

    for source in sources {
        for stage in FunnelStage::ordered() {
            for percentage in 0..=12 {
                let score = quality_score(source, 2_500, percentage, stage);
                assert!((0.0..=1.0).contains(&score));
            }
        }
    }
}

#[test]
fn off_stage_percentages_are_discounted() {
    let on_stage = LookalikeAudience::new(
        SeedSource::Purchasers,
        10_000,
        2,
        FunnelStage::Conversion,
        DEFAULT_MARKET_POPULATION,
    );
    let off_stage = LookalikeAudience::new(
        SeedSource::Purchasers,
        10_000,
        2,
        FunnelStage::Awareness,
        DEFAULT_MARKET_POPULATION,
    );

    assert!((off_stage.quality_score - on_stage.quality_score * 0.8).abs() < 1e-9);
    assert_eq!(on_stage.estimated_reach, 4_600_000);
}

#[test]
fn stages_and_sources_parse_from_loose_labels() {
    assert_eq!(FunnelStage::parse("BOFU"), Some(FunnelStage::Conversion));
    assert_eq!(
        FunnelStage::parse("Consideration"),
        Some(FunnelStage::Consideration)
    );
    assert_eq!(
        SeedSource::parse("website visitors"),
        Some(SeedSource::WebsiteVisitors)
    );
    assert_eq!(SeedSource::parse("carrier pigeons"), None);
}
