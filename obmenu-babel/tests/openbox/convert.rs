//! Conversion tests for full Openbox menus (menu.xml → jgmenu CSV)

use obmenu_babel::format::Format;
use obmenu_babel::{convert, FormatError, Item, JgmenuFormat, OpenboxFormat};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).expect("Failed to read fixture")
}

fn to_csv(xml: &str) -> String {
    convert(xml, &OpenboxFormat::default(), &JgmenuFormat::default()).expect("Should convert")
}

#[test]
fn test_menu_xml_fixture() {
    assert_eq!(to_csv(&fixture("menu.xml")), fixture("menu.csv"));
}

#[test]
fn test_model_of_menu_xml_fixture() {
    let model = OpenboxFormat::default()
        .parse(&fixture("menu.xml"))
        .expect("Should parse menu.xml");

    let ids: Vec<_> = model.tags().map(|t| t.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "apps-accessories-menu",
            "apps-net-menu",
            "root-menu",
            "system-menu",
            "apps-games-menu",
        ]
    );

    let roots = model.tags().filter(|t| t.parent.is_none()).count();
    assert_eq!(roots, 4, "only system-menu is nested inline");

    let root = model.tag(model.find_tag("root-menu").unwrap());
    let checkouts: Vec<_> = root
        .items
        .iter()
        .filter(|item| matches!(item, Item::Checkout { .. }))
        .collect();
    assert_eq!(checkouts.len(), 4);
}

#[test]
fn test_execute_command_line() {
    let csv = to_csv(
        r#"<openbox_menu><menu id="root-menu" label="Root">
             <item label="Web"><action name="Execute"><command>firefox</command></action></item>
           </menu></openbox_menu>"#,
    );
    assert!(csv.lines().any(|line| line == "Web,firefox"));
}

#[test]
fn test_reconfigure_without_command_node() {
    let csv = to_csv(
        r#"<openbox_menu><menu id="root-menu" label="Root">
             <item label="Reload"><action name="Reconfigure"/></item>
           </menu></openbox_menu>"#,
    );
    assert!(csv.lines().any(|line| line == "Reload,openbox --reconfigure"));
}

#[test]
fn test_separator_label() {
    let csv = to_csv(
        r#"<openbox_menu><menu id="root-menu" label="Root">
             <separator label="—"/>
           </menu></openbox_menu>"#,
    );
    assert_eq!(csv, "Root,^tag(root-menu)\n^sep(—)\n\n");
}

#[test]
fn test_nested_menu_without_id_adds_no_checkout() {
    let csv = to_csv(
        r#"<openbox_menu><menu id="outer" label="Outer">
             <menu label="Inner"><item label="X"><action name="Execute"><command>x</command></action></item></menu>
           </menu></openbox_menu>"#,
    );
    // The inner menu takes the root identifier, so it is printed first and the outer
    // menu, left without items, is not printed at all.
    assert_eq!(csv, "Inner,^tag(root-menu)\nBack,^back()\nX,x\n\n");
}

#[test]
fn test_ampersands_in_labels() {
    let csv = to_csv(
        r#"<openbox_menu><menu id="root-menu" label="Tom &amp; Jerry">
             <item label="Cut &amp; Paste"><action name="Execute"><command>xclip</command></action></item>
           </menu></openbox_menu>"#,
    );
    assert_eq!(csv, "Tom & Jerry,^tag(root-menu)\nCut &amp; Paste,xclip\n\n");
}

#[test]
fn test_configured_root_tag() {
    let csv = convert(
        &fixture("menu.xml"),
        &OpenboxFormat::new("apps-net-menu"),
        &JgmenuFormat::default(),
    )
    .expect("Should convert");

    assert!(csv.starts_with("Internet,^tag(apps-net-menu)\nFirefox,firefox\n\n"));
}

#[test]
fn test_malformed_document_produces_nothing() {
    let result = convert(
        "not a menu at all",
        &OpenboxFormat::default(),
        &JgmenuFormat::default(),
    );
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[rstest]
#[case::truncated(r#"<openbox_menu><menu id="root-menu" label="Openbox"><item label="A">"#)]
#[case::unquoted_attribute(r#"<openbox_menu><menu id=root-menu label="Openbox"/></openbox_menu>"#)]
#[case::undeclared_entity(r#"<openbox_menu><item label="&nbsp;"/></openbox_menu>"#)]
#[case::mismatched_tags(r#"<openbox_menu><menu id="a" label="A"></item></openbox_menu>"#)]
fn test_ill_formed_xml_is_rejected(#[case] xml: &str) {
    let result = convert(xml, &OpenboxFormat::default(), &JgmenuFormat::default());
    assert!(matches!(result, Err(FormatError::ParseError(_))));
}

#[test]
fn test_multi_line_command_and_label_stay_on_one_line() {
    let csv = to_csv(
        r#"<openbox_menu><menu id="root-menu" label="Open&#10;box">
  <item label="Two&#10;Lines"><action name="Execute"><command>sh -c 'cd ~ &amp;&amp;
    xterm'</command></action></item>
</menu></openbox_menu>"#,
    );
    assert_eq!(csv, "Openbox,^tag(root-menu)\nTwoLines,sh -c 'cd ~ &&    xterm'\n\n");
}
