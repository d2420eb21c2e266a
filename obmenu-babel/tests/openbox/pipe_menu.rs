//! Conversion tests for pipe-menu output (`<openbox_pipe_menu>` documents)

use obmenu_babel::{convert, JgmenuFormat, OpenboxFormat};
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).expect("Failed to read fixture")
}

#[test]
fn test_single_item_pipe_menu() {
    let xml = r#"<openbox_pipe_menu><item label="A"><action name="Execute"><command>xterm</command></action></item></openbox_pipe_menu>"#;
    let csv = convert(xml, &OpenboxFormat::default(), &JgmenuFormat::default())
        .expect("Should convert");

    assert_eq!(csv, ",^tag(root-menu)\nA,xterm\n\n");
}

#[test]
fn test_pipe_menu_fixture() {
    let csv = convert(
        &fixture("pipe-menu.xml"),
        &OpenboxFormat::default(),
        &JgmenuFormat::default(),
    )
    .expect("Should convert");

    assert_eq!(csv, fixture("pipe-menu.csv"));
}

#[test]
fn test_nested_pipe_menu_reference() {
    let xml = r#"<openbox_pipe_menu>
        <menu id="recent" label="Recent" execute="obrecent --limit 10"/>
    </openbox_pipe_menu>"#;
    let csv = convert(xml, &OpenboxFormat::default(), &JgmenuFormat::new("obmenu"))
        .expect("Should convert");

    assert_eq!(
        csv,
        ",^tag(root-menu)\nRecent,^pipe(obmenu --cmd='obrecent --limit 10' --tag='Recent')\n\n"
    );
}
