use thingsday_core::script::render_move;
use thingsday_core::{render_script, MoveOperation, TargetList};

fn move_op(id: &str, target: TargetList, name: &str) -> MoveOperation {
    MoveOperation {
        todo_id: id.to_string(),
        target,
        name: name.to_string(),
    }
}

#[test]
fn move_renders_as_one_command_with_name_annotation() {
    let op = move_op("ABC-123", TargetList::Today, "Buy milk");
    assert_eq!(
        render_move(&op),
        "move my todoWithID(\"ABC-123\") to list \"Today\" -- Buy milk"
    );
}

#[test]
fn script_wraps_indented_commands_in_the_fixed_envelope() {
    let operations = vec![
        move_op("1", TargetList::Anytime, "Old"),
        move_op("2", TargetList::Today, "New"),
    ];

    let script = render_script("on todoWithID(x)\nend todoWithID", &operations);

    let expected = concat!(
        "on todoWithID(x)\n",
        "end todoWithID\n",
        "\n",
        "-----\n",
        "tell application \"Things3\"\n",
        "\tmove my todoWithID(\"1\") to list \"Anytime\" -- Old\n",
        "\tmove my todoWithID(\"2\") to list \"Today\" -- New\n",
        "end tell"
    );
    assert_eq!(script, expected);
}

#[test]
fn emission_is_byte_identical_across_calls() {
    let operations = vec![
        move_op("1", TargetList::Anytime, "Old"),
        move_op("2", TargetList::Today, "New"),
    ];

    let first = render_script("helpers", &operations);
    let second = render_script("helpers", &operations);

    assert_eq!(first, second);
}

#[test]
fn empty_plan_still_renders_the_envelope() {
    let script = render_script("helpers", &[]);

    assert_eq!(
        script,
        "helpers\n\n-----\ntell application \"Things3\"\n\t\nend tell"
    );
}

#[test]
fn operation_order_is_preserved_verbatim() {
    let operations = vec![
        move_op("c", TargetList::Today, "third priority"),
        move_op("b", TargetList::Today, "second priority"),
        move_op("a", TargetList::Today, "first priority"),
    ];

    let script = render_script("", &operations);
    let c_at = script.find("todoWithID(\"c\")").unwrap();
    let b_at = script.find("todoWithID(\"b\")").unwrap();
    let a_at = script.find("todoWithID(\"a\")").unwrap();

    assert!(c_at < b_at && b_at < a_at);
}
