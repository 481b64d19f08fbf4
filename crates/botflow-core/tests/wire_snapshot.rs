//! Pins the exact stored-document JSON so accidental codec changes show up
//! as a diff instead of silently corrupting saved flows.

use botflow_core::{
    Edge, ElementId, FlowDocument, FlowGraph, Node, NodeData, Position, Viewport,
};

fn fixed_id(s: &str) -> ElementId {
    s.parse().unwrap()
}

#[test]
fn stored_document_shape_stays_stable() {
    let intent = Node {
        id: fixed_id("11111111-1111-4111-8111-111111111111"),
        position: Position::new(80.0, 40.0),
        data: NodeData::Intent {
            label: "Intent Node ".to_string(),
            samples: vec!["book a table".to_string()],
        },
    };
    let response = Node {
        id: fixed_id("22222222-2222-4222-8222-222222222222"),
        position: Position::new(320.0, 40.0),
        data: NodeData::Response {
            label: "Response Node ".to_string(),
            samples: Vec::new(),
        },
    };
    let edge = Edge {
        id: fixed_id("33333333-3333-4333-8333-333333333333"),
        source: intent.id,
        target: response.id,
        source_handle: None,
        target_handle: Some("a".to_string()),
    };
    let graph =
        FlowGraph::from_elements(vec![intent.into(), response.into(), edge.into()]).unwrap();
    let doc = FlowDocument::from_graph(&graph, Viewport::new(12.5, -4.0, 1.25));

    let rendered = serde_json::to_string_pretty(&doc).unwrap();
    insta::assert_snapshot!(rendered, @r###"
    {
      "elements": [
        {
          "id": "11111111-1111-4111-8111-111111111111",
          "type": "intent",
          "position": {
            "x": 80.0,
            "y": 40.0
          },
          "data": {
            "label": "Intent Node ",
            "samples": [
              "book a table"
            ]
          }
        },
        {
          "id": "22222222-2222-4222-8222-222222222222",
          "type": "response",
          "position": {
            "x": 320.0,
            "y": 40.0
          },
          "data": {
            "label": "Response Node ",
            "samples": []
          }
        },
        {
          "id": "33333333-3333-4333-8333-333333333333",
          "source": "11111111-1111-4111-8111-111111111111",
          "target": "22222222-2222-4222-8222-222222222222",
          "targetHandle": "a"
        }
      ],
      "position": [
        12.5,
        -4.0
      ],
      "zoom": 1.25
    }
    "###);
}
