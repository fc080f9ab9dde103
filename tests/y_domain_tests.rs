use indexmap::IndexMap;
use serde_json::{Value, json};
use xy_chart::core::{
    DEFAULT_GROUP_ID, Domain, DomainRange, GroupId, ScaleType, SeriesSpec, SeriesType, StackMode,
    YDomain, get_data_series, merge_y_domains,
};

fn rows(points: &[(f64, f64)]) -> Vec<Value> {
    points
        .iter()
        .map(|(x, y)| json!({ "x": x, "y": y }))
        .collect()
}

fn spec_1(series_type: SeriesType) -> SeriesSpec {
    SeriesSpec::new(
        "spec_1",
        series_type,
        rows(&[(1.0, 10.0), (2.0, 2.0), (3.0, 5.0)]),
    )
}

fn spec_2(series_type: SeriesType) -> SeriesSpec {
    SeriesSpec::new(
        "spec_2",
        series_type,
        rows(&[(1.0, 7.0), (2.0, 3.0), (3.0, 2.0), (4.0, 12.0)]),
    )
}

fn merge_with(specs: &[SeriesSpec], custom: &IndexMap<GroupId, DomainRange>) -> Vec<YDomain> {
    let series = get_data_series(specs);
    merge_y_domains(specs, &series, custom)
}

fn single_domain(specs: &[SeriesSpec], custom: &IndexMap<GroupId, DomainRange>) -> Domain {
    let mut domains = merge_with(specs, custom);
    assert_eq!(domains.len(), 1);
    domains.remove(0).domain
}

fn custom(range: DomainRange) -> IndexMap<GroupId, DomainRange> {
    IndexMap::from([(DEFAULT_GROUP_ID.to_owned(), range)])
}

#[test]
fn fitted_lines_hug_the_data() {
    let specs = [
        spec_1(SeriesType::Line).scaled_to_data_extent(true),
        spec_2(SeriesType::Line).scaled_to_data_extent(true),
    ];
    assert_eq!(
        single_domain(&specs, &IndexMap::new()),
        Domain::continuous(2.0, 12.0)
    );
}

#[test]
fn unfitted_lines_include_zero() {
    let specs = [spec_1(SeriesType::Line), spec_2(SeriesType::Line)];
    let domains = merge_with(&specs, &IndexMap::new());
    assert_eq!(domains[0].domain, Domain::continuous(0.0, 12.0));
    assert_eq!(domains[0].group_id, DEFAULT_GROUP_ID);
    assert!(!domains[0].scale_to_extent);
}

#[test]
fn areas_keep_zero_even_when_fitted() {
    let specs = [
        spec_1(SeriesType::Area).scaled_to_data_extent(true),
        spec_2(SeriesType::Area).scaled_to_data_extent(true),
    ];
    let domains = merge_with(&specs, &IndexMap::new());
    assert_eq!(domains[0].domain, Domain::continuous(0.0, 12.0));
    assert!(!domains[0].scale_to_extent);
}

#[test]
fn stacked_series_sum_per_x_value() {
    let specs = [
        spec_1(SeriesType::Area).stacked_by(vec!["x".into()]),
        spec_2(SeriesType::Area).stacked_by(vec!["x".into()]),
    ];
    let domains = merge_with(&specs, &IndexMap::new());
    assert_eq!(domains[0].domain, Domain::continuous(0.0, 17.0));
    assert!(domains[0].is_stacked);
    assert!(!domains[0].is_percentage);
}

#[test]
fn partially_stacked_group_only_sums_stacked_series() {
    let specs = [
        spec_1(SeriesType::Area).stacked_by(vec!["x".into()]),
        spec_2(SeriesType::Area),
    ];
    assert_eq!(
        single_domain(&specs, &IndexMap::new()),
        Domain::continuous(0.0, 12.0)
    );
}

#[test]
fn negative_stack_contributions_grow_downwards() {
    let specs = [
        SeriesSpec::bar("up", rows(&[(1.0, 4.0), (2.0, 1.0)])).stacked_by(vec!["x".into()]),
        SeriesSpec::bar("down", rows(&[(1.0, -3.0), (2.0, -5.0)])).stacked_by(vec!["x".into()]),
        SeriesSpec::bar("more", rows(&[(1.0, 2.0), (2.0, -1.0)])).stacked_by(vec!["x".into()]),
    ];
    assert_eq!(
        single_domain(&specs, &IndexMap::new()),
        Domain::continuous(-6.0, 6.0)
    );
}

#[test]
fn percentage_stack_spans_unit_interval() {
    let specs = [
        spec_1(SeriesType::Bar)
            .stacked_by(vec!["x".into()])
            .with_stack_mode(StackMode::Percentage),
        spec_2(SeriesType::Bar).stacked_by(vec!["x".into()]),
    ];
    let domains = merge_with(&specs, &IndexMap::new());
    assert_eq!(domains[0].domain, Domain::continuous(0.0, 1.0));
    assert!(domains[0].is_percentage);
}

#[test]
fn complete_custom_domain_wins() {
    let specs = [spec_1(SeriesType::Line), spec_2(SeriesType::Line)];
    assert_eq!(
        single_domain(&specs, &custom(DomainRange::complete(0.0, 20.0))),
        Domain::continuous(0.0, 20.0)
    );
}

#[test]
fn inverted_custom_domain_is_ignored() {
    let specs = [spec_1(SeriesType::Line), spec_2(SeriesType::Line)];
    assert_eq!(
        single_domain(&specs, &custom(DomainRange::complete(20.0, 0.0))),
        Domain::continuous(0.0, 12.0)
    );
}

#[test]
fn custom_upper_bound_extends_fitted_domain() {
    let specs = [
        spec_1(SeriesType::Line).scaled_to_data_extent(true),
        spec_2(SeriesType::Line).scaled_to_data_extent(true),
    ];
    assert_eq!(
        single_domain(&specs, &custom(DomainRange::upper(20.0))),
        Domain::continuous(2.0, 20.0)
    );
}

#[test]
fn custom_fit_flag_fits_the_group() {
    let specs = [spec_1(SeriesType::Line), spec_2(SeriesType::Line)];
    assert_eq!(
        single_domain(&specs, &custom(DomainRange::default().with_fit(true))),
        Domain::continuous(2.0, 12.0)
    );
}

#[test]
fn custom_lower_above_data_collapses_to_lower() {
    let specs = [spec_1(SeriesType::Line), spec_2(SeriesType::Line)];
    assert_eq!(
        single_domain(&specs, &custom(DomainRange::lower(20.0))),
        Domain::continuous(20.0, 20.0)
    );
}

#[test]
fn custom_upper_below_data_collapses_to_upper() {
    let specs = [spec_1(SeriesType::Line), spec_2(SeriesType::Line)];
    assert_eq!(
        single_domain(&specs, &custom(DomainRange::upper(-1.0))),
        Domain::continuous(-1.0, -1.0)
    );
}

#[test]
fn groups_get_their_own_domain_in_first_seen_order() {
    let specs = [
        spec_1(SeriesType::Line).with_group("right"),
        spec_2(SeriesType::Line).with_scale_types(ScaleType::Linear, ScaleType::Log),
    ];
    let domains = merge_with(&specs, &IndexMap::new());
    let groups: Vec<&str> = domains.iter().map(|domain| domain.group_id.as_str()).collect();
    assert_eq!(groups, ["right", DEFAULT_GROUP_ID]);
    assert_eq!(domains[0].domain, Domain::continuous(0.0, 10.0));
    assert_eq!(domains[1].scale_type, ScaleType::Log);
}

#[test]
fn y0_values_widen_the_domain() {
    let specs = [SeriesSpec::area(
        "band",
        vec![
            json!({ "x": 1, "y": 5, "y0": -3 }),
            json!({ "x": 2, "y": 6, "y0": 1 }),
        ],
    )
    .with_y0_accessors(vec!["y0".into()])];
    assert_eq!(
        single_domain(&specs, &IndexMap::new()),
        Domain::continuous(-3.0, 6.0)
    );
}

#[test]
fn group_without_values_is_empty() {
    let specs = [SeriesSpec::line("empty", Vec::new())];
    assert!(single_domain(&specs, &IndexMap::new()).is_empty());
}
