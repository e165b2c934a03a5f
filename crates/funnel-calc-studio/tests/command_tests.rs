use funnel_calc_studio::commands::{
    execute_analyze, execute_template, execute_what_if, funnel_findings, resolve_funnel,
    validate_funnel, validate_funnel_file, validate_what_if, AnalyzeArgs, FunnelSource, Period, TemplateArgs,
    WhatIfArgs, WhatIfRequest,
};
use funnel_calc_studio::engine::{FunnelConfig, Stage};
use funnel_calc_studio::input::load_funnel;
use funnel_calc_studio::output::{read_report, write_funnel_definition};

fn valid_config() -> FunnelConfig {
    FunnelConfig {
        average_order_value: 95.0,
        stages: vec![
            Stage::new("Landing", 100_000),
            Stage::new("Product", 75_000),
            Stage::new("Cart", 8_000),
            Stage::new("Checkout", 4_000),
            Stage::new("Purchase", 2_300),
        ],
    }
}

fn inline_source(config: &FunnelConfig) -> FunnelSource {
    FunnelSource {
        config_path: None,
        stages: config.stages.clone(),
        average_order_value: Some(config.average_order_value),
    }
}

#[test]
fn test_validate_funnel_valid() {
    assert!(validate_funnel(&valid_config(), false).is_ok());
}

#[test]
fn test_validate_funnel_too_few_stages() {
    let mut config = valid_config();
    config.stages.truncate(2);
    assert!(validate_funnel(&config, false).is_err());
}

#[test]
fn test_validate_funnel_too_many_stages() {
    let mut config = valid_config();
    config.stages = (0..11).map(|i| Stage::new(format!("s{}", i), 100)).collect();
    assert!(validate_funnel(&config, false).is_err());
}

#[test]
fn test_validate_funnel_bad_order_value() {
    let mut config = valid_config();
    config.average_order_value = 0.0;
    assert!(validate_funnel(&config, false).is_err());
}

#[test]
fn test_validate_funnel_empty_name() {
    let mut config = valid_config();
    config.stages[2].name = "  ".to_string();
    assert!(validate_funnel(&config, false).is_err());
}

#[test]
fn test_validate_funnel_empty_first_stage() {
    let mut config = valid_config();
    config.stages[0].users = 0;
    assert!(validate_funnel(&config, true).is_err());
}

#[test]
fn test_validate_funnel_increasing_stage() {
    let mut config = valid_config();
    config.stages[3].users = 9_000;

    let findings = funnel_findings(&config, false);
    assert_eq!(findings.len(), 1);
    assert!(findings[0].contains("Checkout"));

    assert!(validate_funnel(&config, false).is_err());
    assert!(validate_funnel(&config, true).is_ok());
}

#[test]
fn test_validate_what_if() {
    let config = valid_config();
    let request = WhatIfRequest {
        transition: 3,
        improvement_pct: 100.0,
        period: Period::Annually,
    };
    assert!(validate_what_if(&config, &request).is_ok());

    let out_of_range = WhatIfRequest {
        transition: 4,
        ..request
    };
    assert!(validate_what_if(&config, &out_of_range).is_err());

    for pct in [0.5, 100.5, f64::NAN] {
        let bad_pct = WhatIfRequest {
            improvement_pct: pct,
            ..request
        };
        assert!(validate_what_if(&config, &bad_pct).is_err());
    }
}

#[test]
fn test_period_multipliers() {
    assert_eq!(Period::Monthly.multiplier(), 1.0);
    assert_eq!(Period::Quarterly.multiplier(), 3.0);
    assert_eq!(Period::Annually.multiplier(), 12.0);
    assert_eq!(Period::Quarterly.to_string(), "Quarterly");
}

#[test]
fn test_resolve_funnel_requires_input() {
    assert!(resolve_funnel(&FunnelSource::default()).is_err());
}

#[test]
fn test_resolve_funnel_overrides_file_order_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("funnel.toml");
    execute_template(TemplateArgs {
        output: path.clone(),
        stages: 5,
        force: false,
    })
    .unwrap();

    let source = FunnelSource {
        config_path: Some(path),
        stages: vec![],
        average_order_value: Some(120.0),
    };
    let config = resolve_funnel(&source).unwrap();
    assert_eq!(config.average_order_value, 120.0);
    assert_eq!(config.stages.len(), 5);
}

#[test]
fn test_template_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("funnel.json");
    let args = TemplateArgs {
        output: path.clone(),
        stages: 4,
        force: false,
    };

    execute_template(args.clone()).unwrap();
    assert!(execute_template(args.clone()).is_err());
    assert!(execute_template(TemplateArgs { force: true, ..args }).is_ok());
    assert_eq!(load_funnel(&path).unwrap().stages.len(), 4);
}

#[test]
fn test_template_stage_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("funnel.toml");

    for stages in [2, 11] {
        let args = TemplateArgs {
            output: path.clone(),
            stages,
            force: false,
        };
        assert!(execute_template(args).is_err(), "{} stages accepted", stages);
        assert!(!path.exists());
    }
}

#[test]
fn test_template_output_passes_validation() {
    let dir = tempfile::tempdir().unwrap();

    for stages in [3, 10] {
        let path = dir.path().join(format!("funnel_{}.toml", stages));
        execute_template(TemplateArgs {
            output: path.clone(),
            stages,
            force: false,
        })
        .unwrap();

        assert!(validate_funnel_file(&path, false).is_ok());
    }
}

#[test]
fn test_validate_funnel_file_valid() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("funnel.json");
    write_funnel_definition(&valid_config(), &path).unwrap();

    assert!(validate_funnel_file(&path, false).is_ok());
}

#[test]
fn test_validate_funnel_file_increasing_stage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("funnel.toml");
    let mut config = valid_config();
    config.stages[3].users = 9_000;
    write_funnel_definition(&config, &path).unwrap();

    assert!(validate_funnel_file(&path, false).is_err());
    assert!(validate_funnel_file(&path, true).is_ok());
}

#[test]
fn test_validate_funnel_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(validate_funnel_file(&dir.path().join("missing.toml"), false).is_err());
}

#[test]
fn test_execute_analyze_writes_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("out/report.json");
    let chart_path = dir.path().join("out/funnel.svg");
    let config = valid_config();

    let args = AnalyzeArgs {
        source: inline_source(&config),
        output_json: Some(report_path.clone()),
        output_svg: Some(chart_path.clone()),
        print_summary: false,
        what_if: Some(WhatIfRequest {
            transition: 1,
            improvement_pct: 10.0,
            period: Period::Annually,
        }),
        ..Default::default()
    };

    let report = execute_analyze(args).unwrap();
    let what_if = report.what_if.as_ref().unwrap();
    assert!((what_if.projected_revenue - 196_650.0).abs() < 1e-6);

    let loaded = read_report(&report_path).unwrap();
    assert_eq!(loaded.transitions.len(), 4);
    assert!(chart_path.exists());
}

#[test]
fn test_execute_analyze_rejects_increasing_unless_lenient() {
    let mut config = valid_config();
    config.stages[2].users = 80_000;

    let strict = AnalyzeArgs {
        source: inline_source(&config),
        print_summary: false,
        ..Default::default()
    };
    assert!(execute_analyze(strict).is_err());

    let lenient = AnalyzeArgs {
        source: inline_source(&config),
        lenient: true,
        print_summary: false,
        ..Default::default()
    };
    let report = execute_analyze(lenient).unwrap();
    assert_eq!(report.transitions[1].drop_off_users, -5_000);
}

#[test]
fn test_execute_what_if() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("scenario.json");
    let config = valid_config();

    let result = execute_what_if(WhatIfArgs {
        source: inline_source(&config),
        lenient: false,
        request: WhatIfRequest {
            transition: 0,
            improvement_pct: 20.0,
            period: Period::Quarterly,
        },
        output_json: Some(out.clone()),
    })
    .unwrap();

    // 100,000 * 20% * 0.023 * 95 * 3
    assert!((result.projected_revenue - 131_100.0).abs() < 1e-6);
    assert!(out.exists());
}

#[test]
fn test_execute_what_if_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested/dirs/scenario.json");

    let result = execute_what_if(WhatIfArgs {
        source: inline_source(&valid_config()),
        lenient: false,
        request: WhatIfRequest {
            transition: 1,
            improvement_pct: 10.0,
            period: Period::Monthly,
        },
        output_json: Some(out.clone()),
    })
    .unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written["from_stage"], "Product");
    assert_eq!(written["transition_index"], 1);
    assert!((result.additional_revenue - 16_387.5).abs() < 1e-6);
}
