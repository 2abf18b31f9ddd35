//! Asteroid belt: clones of one shared model template scattered in an
//! annulus between Mars and Jupiter, revolving as a rigid group.
//!
//! The template is requested at startup and the population is deferred
//! until it has finished loading; the belt may keep growing afterwards
//! through [`add_asteroid`].

use bevy::{asset::LoadState, gltf::GltfAssetLabel, prelude::*};
use rand::Rng;
use sim::{ORBIT_DISTANCE_DISPLAY_FACTOR, placement, scale_kilometers};

/// Shared model; every belt member clones this one template.
const ASTEROID_MODEL: &str = "models/asteroid.glb";

#[derive(Resource)]
pub struct BeltConfig {
    /// Inner edge of the annulus in scene units.
    pub min_radius: f32,
    /// Outer edge of the annulus in scene units.
    pub max_radius: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Rigid-group revolution speed (rad/s about the global vertical).
    pub rotation_speed: f32,
    /// Members spawned in addition to the first once the template loads.
    pub extra_asteroids: usize,
}

impl Default for BeltConfig {
    fn default() -> Self {
        Self {
            min_radius: scale_kilometers(300_000_000.0) * ORBIT_DISTANCE_DISPLAY_FACTOR,
            max_radius: scale_kilometers(500_000_000.0) * ORBIT_DISTANCE_DISPLAY_FACTOR,
            min_scale: 1.0,
            max_scale: 10.0,
            rotation_speed: 0.01,
            extra_asteroids: 10,
        }
    }
}

/// Handle to the shared template, held from startup while it loads.
#[derive(Resource)]
struct AsteroidTemplate(Handle<Scene>);

#[derive(Component)]
struct BeltRoot;

#[derive(Component)]
pub struct Asteroid;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<BeltConfig>();
    app.add_systems(Startup, begin_loading);
    app.add_systems(
        Update,
        (populate_when_loaded.run_if(not(belt_populated)), rotate_belt),
    );
}

fn belt_populated(members: Query<(), With<Asteroid>>) -> bool {
    !members.is_empty()
}

fn begin_loading(mut commands: Commands, asset_server: Res<AssetServer>) {
    let template = asset_server.load(GltfAssetLabel::Scene(0).from_asset(ASTEROID_MODEL));
    commands.insert_resource(AsteroidTemplate(template));
    commands.spawn((
        Name::new("Asteroid belt"),
        BeltRoot,
        Transform::default(),
        Visibility::default(),
    ));
}

/// One-shot population once the template (and its dependencies) report
/// loaded: the first member plus the configured number of extras. A failed
/// template load is a fatal startup error.
fn populate_when_loaded(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    template: Res<AsteroidTemplate>,
    config: Res<BeltConfig>,
    root: Single<Entity, With<BeltRoot>>,
) -> Result {
    if let LoadState::Failed(err) = asset_server.load_state(&template.0) {
        return Err(format!("asteroid template failed to load: {err}").into());
    }
    if !asset_server.is_loaded_with_dependencies(&template.0) {
        return Ok(());
    }

    let mut rng = rand::thread_rng();
    for _ in 0..=config.extra_asteroids {
        add_asteroid(&mut commands, *root, &template.0, &config, &mut rng);
    }

    info!(
        "asteroid belt populated with {} members",
        config.extra_asteroids + 1
    );
    Ok(())
}

/// The belt revolves as a rigid body: one shared rotation is applied to
/// every member's position. Members never spin and never change radius.
fn rotate_belt(
    time: Res<Time>,
    config: Res<BeltConfig>,
    mut members: Query<&mut Transform, With<Asteroid>>,
) {
    let rotation = Quat::from_rotation_y(config.rotation_speed * time.delta_secs());
    for mut transform in &mut members {
        transform.translation = rotation * transform.translation;
    }
}

/// Clones the shared template into one more belt member: annulus-sampled
/// position, uniform scalar scale from the configured range. Valid at any
/// time after startup, so the belt can grow post-initialization.
pub fn add_asteroid<R: Rng>(
    commands: &mut Commands,
    root: Entity,
    template: &Handle<Scene>,
    config: &BeltConfig,
    rng: &mut R,
) {
    let translation = placement::random_point_in_annulus(rng, config.min_radius, config.max_radius);
    let scale = rng.gen_range(config.min_scale..=config.max_scale);
    commands.spawn((
        Asteroid,
        SceneRoot(template.clone()),
        Transform::from_translation(translation).with_scale(Vec3::splat(scale)),
        ChildOf(root),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn test_config() -> BeltConfig {
        BeltConfig {
            min_radius: 1000.0,
            max_radius: 2000.0,
            min_scale: 1.0,
            max_scale: 10.0,
            rotation_speed: 0.01,
            extra_asteroids: 5,
        }
    }

    fn populate(world: &mut World, config: &BeltConfig, rng: &mut StdRng) {
        let root = world.spawn_empty().id();
        let template = Handle::<Scene>::default();
        let mut commands = world.commands();
        for _ in 0..=config.extra_asteroids {
            add_asteroid(&mut commands, root, &template, config, rng);
        }
        world.flush();
    }

    #[test]
    fn adding_an_asteroid_grows_the_belt_by_exactly_one() {
        let mut world = World::new();
        let root = world.spawn_empty().id();
        let template = Handle::<Scene>::default();
        let config = test_config();
        let mut rng = StdRng::seed_from_u64(3);

        for expected in 1..=4 {
            let mut commands = world.commands();
            add_asteroid(&mut commands, root, &template, &config, &mut rng);
            world.flush();
            let count = world
                .query_filtered::<(), With<Asteroid>>()
                .iter(&world)
                .count();
            assert_eq!(count, expected);
        }
    }

    #[test]
    fn initial_population_is_one_plus_the_extra_count() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(5);
        populate(&mut world, &test_config(), &mut rng);

        let count = world
            .query_filtered::<(), With<Asteroid>>()
            .iter(&world)
            .count();
        assert_eq!(count, 6);
    }

    #[test]
    fn members_land_inside_the_annulus() {
        let mut world = World::new();
        let config = test_config();
        let mut rng = StdRng::seed_from_u64(7);
        populate(&mut world, &config, &mut rng);

        let mut members = world.query_filtered::<&Transform, With<Asteroid>>();
        for transform in members.iter(&world) {
            let d = transform.translation.length();
            assert!(
                d >= config.min_radius - 1.0e-2 && d <= config.max_radius + 1.0e-2,
                "member at distance {d} outside [{}, {}]",
                config.min_radius,
                config.max_radius
            );
            assert_eq!(transform.translation.y, 0.0);
        }
    }

    #[test]
    fn member_scale_stays_inside_the_configured_range() {
        let mut world = World::new();
        let config = test_config();
        let mut rng = StdRng::seed_from_u64(9);
        populate(&mut world, &config, &mut rng);

        let mut members = world.query_filtered::<&Transform, With<Asteroid>>();
        for transform in members.iter(&world) {
            let s = transform.scale;
            assert_eq!(s.x, s.y);
            assert_eq!(s.y, s.z);
            assert!(s.x >= config.min_scale && s.x <= config.max_scale);
        }
    }

    #[test]
    fn rotation_speed_pi_for_one_second_flips_member_positions() {
        // A half turn about the vertical axis negates X and Z for every
        // member, regardless of where it was placed.
        let config = test_config();
        let rotation = Quat::from_rotation_y(std::f32::consts::PI * 1.0);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..16 {
            let before =
                placement::random_point_in_annulus(&mut rng, config.min_radius, config.max_radius);
            let after = rotation * before;
            assert!((after.x + before.x).abs() < 1.0);
            assert!((after.z + before.z).abs() < 1.0);
        }
    }
}
