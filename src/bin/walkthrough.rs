//! Headless walkthrough of a small demo world.
//!
//! Builds a yard with a poke-able mushroom and a signpost, saves it to a
//! .wld file, reloads it, then scripts a short play session: walk, jump,
//! poke the mushroom, read the signpost. Cue events are printed as they
//! happen, standing in for the sound and UI of a real embedding.

use glam::{Vec2, Vec3};
use walkabout_engine::input::KeyCode;
use walkabout_engine::physics::{Aabb, CollisionMesh};
use walkabout_engine::session::WorldSession;
use walkabout_engine::world::{
    load_wld, save_wld, InteractiveObject, ModalContent, ObjectKind, World,
};

const DT: f32 = 1.0 / 60.0;

fn demo_world() -> World {
    let h = 25.0;
    let a = Vec3::new(-h, 0.0, -h);
    let b = Vec3::new(h, 0.0, -h);
    let c = Vec3::new(h, 0.0, h);
    let d = Vec3::new(-h, 0.0, h);
    let floor = vec![a, c, b, a, d, c];

    World {
        name: "demo yard".to_string(),
        spawn: Vec3::new(0.0, 2.0, 0.0),
        collision: CollisionMesh::from_vertices(&floor),
        objects: vec![
            InteractiveObject::new(
                "mushroom",
                ObjectKind::Prop,
                Aabb::new(Vec3::new(4.0, 0.0, 4.0), Vec3::new(5.0, 1.0, 5.0)),
            ),
            InteractiveObject::new(
                "signpost",
                ObjectKind::Landmark,
                Aabb::new(Vec3::new(-5.0, 0.0, 4.0), Vec3::new(-4.0, 3.0, 5.0)),
            ),
        ],
        modals: vec![ModalContent {
            object: "signpost".to_string(),
            title: "Welcome".to_string(),
            body: "Walk with WASD, jump with Space, click things.".to_string(),
            link: None,
        }],
    }
}

/// NDC of a world point as seen by the session camera.
fn ndc_of(session: &WorldSession, point: Vec3) -> Vec2 {
    let camera = &session.camera;
    let forward = camera.forward();
    let right = forward.cross(Vec3::Y).normalize();
    let up = right.cross(forward);

    let to_point = point - camera.position;
    let depth = to_point.dot(forward);
    let half_fov = (camera.fov * 0.5).tan();
    Vec2::new(
        to_point.dot(right) / (depth * half_fov * camera.aspect_ratio),
        to_point.dot(up) / (depth * half_fov),
    )
}

fn run(session: &mut WorldSession, seconds: f32, label: &str) {
    let steps = (seconds / DT).round() as usize;
    for _ in 0..steps {
        for cue in session.update(DT, None) {
            println!("  cue: {cue:?}");
        }
    }
    let p = session.player().position();
    println!(
        "{label}: at ({:.2}, {:.2}, {:.2}), grounded={}",
        p.x,
        p.y,
        p.z,
        session.player().is_grounded()
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::temp_dir().join("walkabout_demo.wld");
    save_wld(&path, &demo_world())?;
    let world = load_wld(&path)?;
    println!(
        "loaded '{}' from {}: {} triangles, {} objects",
        world.name,
        path.display(),
        world.collision.triangle_count(),
        world.objects.len()
    );

    let mut session = WorldSession::new();
    session.attach_world(world);

    run(&mut session, 1.0, "after spawn drop");

    session.input.keyboard.handle_key(KeyCode::W, true);
    run(&mut session, 2.0, "after walking forward");
    session.input.keyboard.handle_key(KeyCode::W, false);

    session.input.keyboard.handle_key(KeyCode::Space, true);
    run(&mut session, 1.5, "after a jump");
    session.input.keyboard.handle_key(KeyCode::Space, false);

    let mushroom = ndc_of(&session, Vec3::new(4.5, 0.5, 4.5));
    if let Some(cue) = session.interact(mushroom) {
        println!("  cue: {cue:?}");
    }
    run(&mut session, 1.0, "after poking the mushroom");

    let signpost = ndc_of(&session, Vec3::new(-4.5, 1.5, 4.5));
    if let Some(cue) = session.interact(signpost) {
        println!("  cue: {cue:?}");
    }
    if let Some(modal) = session.open_modal() {
        println!("  modal: {} - {}", modal.title, modal.body);
    }
    if let Some(cue) = session.close_modal() {
        println!("  cue: {cue:?}");
    }

    session.input.keyboard.handle_key(KeyCode::R, true);
    run(&mut session, 0.1, "after respawn key");

    std::fs::remove_file(&path)?;
    Ok(())
}
