//! Integration tests for the initial walls-and-boxes layout

use engine::prelude::*;

fn default_simulation() -> Simulation {
    Simulation::new(&SceneConfig::default(), &PhysicsConfig::default())
        .expect("default config builds")
}

fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).abs().max_element() < 1e-3,
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn test_scene_has_walls_then_boxes() {
    let sim = default_simulation();
    let scene = sim.scene();

    assert_eq!(scene.len(), 4 + 10);
    assert_eq!(sim.physics().body_count(), 14);

    for (index, body) in scene.bodies().enumerate() {
        let expected = if index < 4 {
            BodyKind::Static
        } else {
            BodyKind::Dynamic
        };
        assert_eq!(body.kind, expected, "entity {index}");
        assert_eq!(sim.physics().body_kind(body.handle), Some(expected));
    }
}

#[test]
fn test_wall_placement() {
    let sim = default_simulation();
    let shapes: Vec<RectangleShape> = sim.shapes().collect();

    let expected = [
        (Vec2::new(400.0, 5.0), Vec2::new(800.0, 10.0)),
        (Vec2::new(400.0, 595.0), Vec2::new(800.0, 10.0)),
        (Vec2::new(5.0, 300.0), Vec2::new(10.0, 600.0)),
        (Vec2::new(795.0, 300.0), Vec2::new(10.0, 600.0)),
    ];
    for (shape, (center, size)) in shapes.iter().zip(expected) {
        assert_near(shape.position(), center);
        assert_eq!(shape.size(), size);
        assert_eq!(shape.origin(), size * 0.5);
        assert_eq!(shape.fill_color(), Color::WHITE);
    }
}

#[test]
fn test_box_placement() {
    let sim = default_simulation();
    let boxes: Vec<RectangleShape> = sim.shapes().skip(4).collect();

    assert_eq!(boxes.len(), 10);
    for (i, shape) in boxes.iter().enumerate() {
        let expected = Vec2::new((i + 1) as f32 * 800.0 / 12.0, 420.0);
        assert_near(shape.position(), expected);
        assert_eq!(shape.size(), Vec2::new(50.0, 50.0));
        assert_eq!(shape.origin(), Vec2::new(25.0, 25.0));
        assert_eq!(shape.rotation(), 0.0);
        assert_eq!(shape.fill_color(), Color::WHITE);
    }
}

#[test]
fn test_bodies_sit_under_their_shapes() {
    let sim = default_simulation();
    let mapper = sim.mapper();

    for entity in sim.scene().entities() {
        let shape = sim.scene().shape(*entity).unwrap();
        let body = sim.scene().body(*entity).unwrap();
        let position = sim.physics().body_position(body.handle).unwrap();
        assert_near(mapper.sim_to_display(position), shape.position());
    }
}

#[test]
fn test_box_count_is_configurable() {
    let scene_config = SceneConfig {
        box_count: 3,
        ..SceneConfig::default()
    };
    let sim = Simulation::new(&scene_config, &PhysicsConfig::default()).unwrap();

    assert_eq!(sim.scene().len(), 7);
    let xs: Vec<f32> = sim.shapes().skip(4).map(|s| s.position().x).collect();
    assert_eq!(xs.len(), 3);
    assert!((xs[0] - 160.0).abs() < 1e-3);
    assert!((xs[2] - 480.0).abs() < 1e-3);
}

#[test]
fn test_zero_boxes_leaves_only_walls() {
    let scene_config = SceneConfig {
        box_count: 0,
        ..SceneConfig::default()
    };
    let sim = Simulation::new(&scene_config, &PhysicsConfig::default()).unwrap();
    assert_eq!(sim.scene().len(), 4);
}

#[test]
fn test_degenerate_box_size_is_rejected() {
    let scene_config = SceneConfig {
        box_size: Vec2::new(0.0, 50.0),
        ..SceneConfig::default()
    };
    let result = Simulation::new(&scene_config, &PhysicsConfig::default());
    assert!(matches!(result, Err(EngineError::InvalidBoxSize { .. })));
}

#[test]
fn test_overcrowded_box_row_is_rejected() {
    for box_count in [20, u32::MAX] {
        let scene_config = SceneConfig {
            box_count,
            ..SceneConfig::default()
        };
        let result = Simulation::new(&scene_config, &PhysicsConfig::default());
        assert!(
            matches!(result, Err(EngineError::InvalidConfig(_))),
            "box_count {box_count}"
        );
    }
}
