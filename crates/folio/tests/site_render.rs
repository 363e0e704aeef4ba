//! Integration tests for page rendering, reveal state and export.

use folio::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

fn site() -> Site {
    init_tracing();
    Site::new(SiteConfig::default()).unwrap()
}

fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect()
}

#[test]
fn media_items_render_in_listed_order_with_stagger() {
    let site = site();
    let html = site.render("/media").unwrap();

    let outlets = positions(
        &html,
        &[
            "SET News, 18 December 2025",
            "Pulse HK News, 15 December 2025",
            "Photon Media, 7 August 2025",
        ],
    );
    assert!(outlets.is_sorted());

    let delays = positions(
        &html,
        &[
            "transition-delay: 0ms",
            "transition-delay: 150ms",
            "transition-delay: 300ms",
        ],
    );
    assert!(delays.is_sorted());
    assert_eq!(html.matches("transition-delay").count(), 3);

    assert_eq!(html.matches("rel=\"noopener noreferrer\"").count(), 3);
    assert!(html.contains("href=\"https://www.setn.com/News.aspx?NewsID=1767639\" target=\"_blank\""));
    assert!(html.contains(
        "src=\"https://drive.google.com/thumbnail?id=1HM69Fnd1IrU1qiUJFTIOdm8XsmN-331o&amp;sz=w2000\" \
         alt=\"香港角色由國際金融中心 轉向服務中國進動「全球南方」議程\""
    ));
}

#[test]
fn below_fold_blocks_reveal_on_scroll_and_stay_revealed() {
    let mut site = site();

    let about = site.view("/about").unwrap();
    assert_eq!(about.is_revealed(1), Some(true));
    assert_eq!(about.is_revealed(5), Some(false));
    let html = site.render("/about").unwrap();
    assert!(html.contains(
        "<div class=\"clearfix transition-all duration-700 ease-out opacity-0 translate-y-5 scale-95\" \
         data-revealed=\"false\">"
    ));

    let about = site.view_mut("/about").unwrap();
    about.scroll_to_bottom();
    assert_eq!(about.is_revealed(5), Some(true));
    about.scroll_to(0.0);
    assert_eq!(about.is_revealed(5), Some(true));
    assert_eq!(about.viewport().subscription_count(), 0);

    let html = site.render("/about").unwrap();
    assert!(!html.contains("data-revealed=\"false\""));
    assert!(html.contains("opacity-100 translate-y-0 scale-100"));
}

#[test]
fn about_page_renders_biography_verbatim() {
    let site = site();
    let html = site.render("/about").unwrap();

    assert!(html.contains(
        "font-semibold font-['Inter']\">Owen Au is an independent analyst specialising in \
         China's maritime strategy and foreign relations, as well as political transformation \
         and securitisation in Hong Kong.</p>"
    ));
    assert!(html.contains(
        "He currently manages <span class=\"italic font-medium\">China Maritime Watch</span>, a \
         Substack newsletter"
    ));
    assert!(html.contains("alt=\"Owen Au portrait\" class=\"float-right w-48"));
    assert!(html.contains("alt=\"Owen Au research and analysis\" class=\"w-full h-auto"));
}

#[test]
fn initial_scroll_controls_first_reveal() {
    init_tracing();
    let config = SiteConfig::from_toml_str("[viewport]\ninitial_scroll = 400.0\n").unwrap();
    let site = Site::new(config).unwrap();

    let media = site.view("/media").unwrap();
    // Scrolled past the heading before any tracker observed it
    assert_eq!(media.is_revealed(0), Some(false));
    assert_eq!(media.is_revealed(1), Some(true));
    assert_eq!(media.is_revealed(3), Some(true));
}

#[test]
fn continuous_mode_hides_blocks_scrolled_away() {
    init_tracing();
    let config = SiteConfig::from_toml_str("[reveal]\nmode = \"continuous\"\n").unwrap();
    let mut site = Site::new(config).unwrap();

    let media = site.view_mut("/media").unwrap();
    assert_eq!(media.is_revealed(0), Some(true));
    media.scroll_to_bottom();
    assert_eq!(media.is_revealed(0), Some(false));
    assert_eq!(media.is_revealed(3), Some(true));
    media.scroll_to(0.0);
    assert_eq!(media.is_revealed(0), Some(true));
    assert_eq!(media.is_revealed(3), Some(false));
}

#[test]
fn export_writes_one_file_per_route() {
    let site = site();
    let dir = tempfile::tempdir().unwrap();

    let written = site.write_to(dir.path()).unwrap();
    let relative: Vec<_> = written
        .iter()
        .map(|path| path.strip_prefix(dir.path()).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        relative,
        Route::ALL.map(Route::file_path).to_vec()
    );

    let about = std::fs::read_to_string(dir.path().join("about").join("index.html")).unwrap();
    assert!(about.contains("<title>About | Owen Au</title>"));
    let home = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    assert!(home.contains(">Owen Au</h1>"));
}

#[test]
fn config_file_round_trip_and_errors() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    let path = dir.path().join("folio.toml");
    std::fs::write(&path, "[site]\ntitle = \"Owen Au | Analyst\"\noutput_dir = \"public\"\n").unwrap();
    let config = SiteConfig::load(&path).unwrap();
    assert_eq!(config.site.title, "Owen Au | Analyst");
    assert_eq!(config.site.output_dir, std::path::PathBuf::from("public"));
    assert_eq!(config.reveal, SiteConfig::default().reveal);

    let broken = dir.path().join("broken.toml");
    std::fs::write(&broken, "[reveal\nthreshold = 0.1\n").unwrap();
    match SiteConfig::load(&broken) {
        Err(Error::Config { path, .. }) => assert_eq!(path, broken),
        other => panic!("expected a config error, got {other:?}"),
    }

    assert!(matches!(
        SiteConfig::load(dir.path().join("missing.toml")),
        Err(Error::Io { .. })
    ));
}

#[test]
fn changing_threshold_recreates_trackers() {
    let mut site = site();
    let media = site.view_mut("/media").unwrap();

    // Card 2 is about 93% visible at the top of the page
    assert_eq!(media.is_revealed(2), Some(true));
    media.set_options(TrackerOptions::new().with_threshold(1.0));
    assert_eq!(media.is_revealed(2), Some(false));
    assert_eq!(media.is_revealed(1), Some(true));
}

#[test]
fn publications_list_outlets_by_name() {
    let site = site();
    let html = site.render("/publications").unwrap();

    let names = positions(
        &html,
        &[
            ">The Diplomat</h3>",
            ">The Jamestown Foundation</h3>",
            ">Council on Geostrategy</h3>",
            ">China Observers in Central and Eastern Europe (CHOICE)</h3>",
        ],
    );
    assert!(names.is_sorted());
    assert_eq!(html.matches("<article class=\"flex flex-col gap-2\"><h3 ").count(), 4);
}
