use fhir_model_core::types::{
    ActivityDefinition, ActivityDefinitionParticipant, Code, CodeableConcept, Coding, Group,
    Reference, Uri,
};
use fhir_model_core::visitor::{
    CollectingVisitor, Visitable, Visitor, accept_root,
};

fn sample_activity_definition() -> ActivityDefinition {
    let participant = ActivityDefinitionParticipant::builder()
        .r#type("practitioner")
        .role(
            CodeableConcept::builder()
                .coding(
                    Coding::builder()
                        .system("http://example.org/roles")
                        .code(Code::of("lead"))
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    ActivityDefinition::builder()
        .id("ad-1")
        .url(Uri::of("http://example.org/ActivityDefinition/ad-1"))
        .name("WeighPatient")
        .status("active")
        .subject(Reference::of("Group/adults"))
        .library(Uri::of("http://example.org/Library/l1"))
        .participant(participant)
        .build()
        .expect("sample should build")
}

#[test]
fn test_traversal_order_is_declared_field_order() {
    let ad = sample_activity_definition();
    let mut visitor = CollectingVisitor::new();
    accept_root(&ad, &mut visitor);

    let names: Vec<&str> = visitor.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "activityDefinition",
            "url",
            "name",
            "status",
            "subject",
            "reference",
            "library",
            "participant",
            "type",
            "role",
            "coding",
            "system",
            "code",
        ]
    );
    assert_eq!(visitor.nodes()[0].type_name, "ActivityDefinition");
    assert_eq!(visitor.nodes()[4].type_name, "Reference");
    assert_eq!(visitor.nodes()[7].type_name, "ActivityDefinition.Participant");
}

#[test]
fn test_list_elements_carry_insertion_index() {
    let ad = sample_activity_definition();
    let mut visitor = CollectingVisitor::new();
    accept_root(&ad, &mut visitor);

    let library = visitor
        .nodes()
        .iter()
        .find(|n| n.name == "library")
        .expect("library node");
    assert_eq!(library.index, Some(0));

    let scalar = visitor
        .nodes()
        .iter()
        .find(|n| n.name == "status")
        .expect("status node");
    assert_eq!(scalar.index, None);
}

/// Skips whole subtrees whose root is a participant.
#[derive(Default)]
struct PruneParticipants {
    seen: Vec<&'static str>,
    pre_visits: usize,
}

impl Visitor for PruneParticipants {
    fn pre_visit(&mut self, node: &dyn Visitable) -> bool {
        self.pre_visits += 1;
        node.type_name() != "ActivityDefinition.Participant"
    }

    fn visit(&mut self, _name: &str, _index: Option<usize>, node: &dyn Visitable) -> bool {
        self.seen.push(node.type_name());
        true
    }
}

#[test]
fn test_pre_visit_false_skips_node_and_subtree() {
    let ad = sample_activity_definition();
    let mut visitor = PruneParticipants::default();
    accept_root(&ad, &mut visitor);

    assert!(!visitor.seen.contains(&"ActivityDefinition.Participant"));
    // Nothing under the participant is reached either.
    assert!(!visitor.seen.contains(&"CodeableConcept"));
    assert!(!visitor.seen.contains(&"Coding"));
    assert!(visitor.seen.contains(&"string"));
}

/// Observes every node but never descends past the root's direct children.
#[derive(Default)]
struct ShallowVisitor {
    seen: Vec<String>,
    ends: Vec<String>,
}

impl Visitor for ShallowVisitor {
    fn visit(&mut self, name: &str, _index: Option<usize>, _node: &dyn Visitable) -> bool {
        self.seen.push(name.to_string());
        name == "activityDefinition"
    }

    fn visit_end(&mut self, name: &str, _index: Option<usize>, _node: &dyn Visitable) {
        self.ends.push(name.to_string());
    }
}

#[test]
fn test_visit_false_skips_children_but_closes_node() {
    let ad = sample_activity_definition();
    let mut visitor = ShallowVisitor::default();
    accept_root(&ad, &mut visitor);

    // Direct children observed, grandchildren not.
    assert!(visitor.seen.contains(&"participant".to_string()));
    assert!(!visitor.seen.contains(&"role".to_string()));
    // visit_end still fires for the pruned nodes.
    assert_eq!(visitor.seen.len(), visitor.ends.len());
}

#[test]
fn test_group_traversal_includes_reference_children() {
    let group = Group::builder()
        .r#type("person")
        .actual(true)
        .managing_entity(Reference::of("Organization/acme"))
        .build()
        .unwrap();
    let mut visitor = CollectingVisitor::new();
    accept_root(&group, &mut visitor);

    let names: Vec<&str> = visitor.nodes().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["group", "type", "actual", "managingEntity", "reference"]
    );
    assert_eq!(visitor.type_names()[3], "Reference");
}
