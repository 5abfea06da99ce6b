//! Demo population: wanderers roam, seekers hunt them, rocks get in the way.

use green::stage::actor::{Actor, ActorId};
use green::stage::behavior::{Behavior, Idle};
use green::stage::error::StageError;
use green::stage::events::TickContext;
use green::stage::geometric_utils::distance;
use green::stage::kind::Kind;
use green::stage::params::WorldParams;
use green::stage::render::{Image, MacroquadCanvas};
use green::stage::world::{World, WorldView};
use macroquad::texture::Texture2D;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const WANDERER: Kind = Kind::new("wanderer");
pub const SEEKER: Kind = Kind::new("seeker");
pub const ROCK: Kind = Kind::new("rock");

/// Everything the demo can be tuned with from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoParams {
    pub world: WorldParams,
    pub wanderers: usize,
    pub seekers: usize,
    pub rocks: usize,
    /// Units per second.
    pub wanderer_speed: f32,
    /// Units per second.
    pub seeker_speed: f32,
    /// How far seekers notice wanderers.
    pub sight_range: f32,
    /// Image files replacing the generated sprites.
    pub sprites: SpriteFiles,
}

/// Optional image paths, one per kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteFiles {
    pub wanderer: Option<String>,
    pub seeker: Option<String>,
    pub rock: Option<String>,
}

impl Default for DemoParams {
    fn default() -> Self {
        Self {
            world: WorldParams::default(),
            wanderers: 25,
            seekers: 3,
            rocks: 8,
            wanderer_speed: 60.0,
            seeker_speed: 75.0,
            sight_range: 150.0,
            sprites: SpriteFiles::default(),
        }
    }
}

impl DemoParams {
    pub fn load_from_file(path: &str) -> Result<Self, StageError> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Loads `path` if given, falling back to the defaults on any error.
    pub fn load_or_default(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_from_file(path) {
            Ok(params) => {
                log::info!("loaded demo params from {}", path);
                params
            }
            Err(e) => {
                log::warn!("could not load {}: {}; using defaults", path, e);
                Self::default()
            }
        }
    }
}

/// Generated textures, one per kind.
pub struct Sprites {
    pub wanderer: Image,
    pub seeker: Image,
    pub rock: Image,
}

impl Sprites {
    pub fn create(canvas: &mut MacroquadCanvas) -> Self {
        Self {
            wanderer: canvas.insert("wanderer", arrow_texture(16, [120, 200, 255])),
            seeker: canvas.insert("seeker", arrow_texture(24, [255, 110, 90])),
            rock: canvas.insert("rock", arrow_texture(40, [130, 130, 120])),
        }
    }

    /// Generated sprites, with any kind that has a file in `files` loaded
    /// from it instead. A file that fails to load keeps the generated one.
    pub async fn load(canvas: &mut MacroquadCanvas, files: &SpriteFiles) -> Self {
        let mut sprites = Self::create(canvas);
        let slots = [
            ("wanderer", &files.wanderer, &mut sprites.wanderer),
            ("seeker", &files.seeker, &mut sprites.seeker),
            ("rock", &files.rock, &mut sprites.rock),
        ];
        for (key, path, image) in slots {
            let Some(path) = path else { continue };
            match canvas.load(key, path).await {
                Ok(loaded) => *image = loaded,
                Err(e) => log::warn!("{}; using the generated {} sprite", e, key),
            }
        }
        sprites
    }
}

/// Square texture with a brighter stripe on its right side, so the heading
/// is visible once rotated.
fn arrow_texture(size: u16, rgb: [u8; 3]) -> Texture2D {
    let mut bytes = Vec::with_capacity(size as usize * size as usize * 4);
    for _y in 0..size {
        for x in 0..size {
            if x >= size * 3 / 4 {
                bytes.extend_from_slice(&[255, 255, 255, 255]);
            } else {
                bytes.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
            }
        }
    }
    Texture2D::from_rgba8(size, size, &bytes)
}

/// Roams around, bouncing off edges and rocks.
pub struct Wanderer {
    speed: f32,
}

impl Behavior for Wanderer {
    fn act(&mut self, actor: &mut Actor, ctx: &mut TickContext<'_>, dt: f32) {
        let world = ctx.world();
        let mut rng = rand::rng();

        actor.turn(rng.random_range(-90.0_f32..90.0) * dt);
        actor.move_forward(self.speed * dt, world);

        let blocked = matches!(actor.one_intersecting_object(ROCK, world), Ok(Some(_)));
        if blocked {
            actor.move_forward(-self.speed * dt, world);
        }
        if blocked || actor.is_at_edge(world).unwrap_or(false) {
            actor.turn(180.0 + rng.random_range(-30.0_f32..30.0));
        }
    }

    fn added_to_world(&mut self, actor: &mut Actor, _world: &dyn WorldView) {
        actor.set_rotation(rand::rng().random_range(0.0_f32..360.0));
    }
}

/// Chases the nearest wanderer in sight and replaces the ones it catches.
pub struct Seeker {
    speed: f32,
    sight: f32,
    prey_speed: f32,
    prey_image: Image,
    caught: u32,
}

impl Behavior for Seeker {
    fn act(&mut self, actor: &mut Actor, ctx: &mut TickContext<'_>, dt: f32) {
        let world = ctx.world();

        let nearest = actor
            .neighbours(self.sight, WANDERER, world)
            .into_iter()
            .min_by(|a, b| {
                let da = distance(actor.x(), actor.y(), a.x(), a.y());
                let db = distance(actor.x(), actor.y(), b.x(), b.y());
                da.total_cmp(&db)
            });
        match nearest {
            Some(prey) => actor.turn_towards_actor(prey),
            None => actor.turn(20.0 * dt),
        }
        actor.move_forward(self.speed * dt, world);
        if actor.is_at_edge(world).unwrap_or(false) {
            actor.turn(180.0);
        }

        let caught = actor
            .one_intersecting_object(WANDERER, world)
            .ok()
            .flatten()
            .filter(|prey| !ctx.is_despawning(prey.id()));
        if let Some(prey) = caught {
            self.caught += 1;
            log::info!("{} caught {} ({} so far)", actor, prey, self.caught);
            ctx.despawn(prey.id());

            let (x, y) = random_point(&mut rand::rng(), world.width(), world.height());
            ctx.spawn(
                Actor::from_image(x, y, self.prey_image.clone()).with_kind(WANDERER),
                Wanderer {
                    speed: self.prey_speed,
                },
            );
        }
    }
}

/// Builds the demo world.
pub fn populate(params: &DemoParams, sprites: &Sprites) -> World {
    let mut world = World::new(params.world.clone());
    let mut rng = rand::rng();
    let (width, height) = (params.world.width, params.world.height);

    for _ in 0..params.rocks {
        let (x, y) = random_point(&mut rng, width, height);
        let mut rock = Actor::from_image_scaled(
            x,
            y,
            sprites.rock.clone(),
            rng.random_range(0.75_f32..1.5),
        )
        .with_kind(ROCK);
        rock.set_rotation(rng.random_range(0.0_f32..90.0));
        rock.set_z(-1.0);
        world.add(rock, Idle);
    }

    for _ in 0..params.wanderers {
        let (x, y) = random_point(&mut rng, width, height);
        let wanderer = Actor::from_image(x, y, sprites.wanderer.clone()).with_kind(WANDERER);
        world.add(
            wanderer,
            Wanderer {
                speed: params.wanderer_speed,
            },
        );
    }

    for _ in 0..params.seekers {
        let (x, y) = random_point(&mut rng, width, height);
        let mut seeker = Actor::from_image(x, y, sprites.seeker.clone()).with_kind(SEEKER);
        seeker.set_z(1.0);
        seeker.set_opacity(220.0);
        world.add(
            seeker,
            Seeker {
                speed: params.seeker_speed,
                sight: params.sight_range,
                prey_speed: params.wanderer_speed,
                prey_image: sprites.wanderer.clone(),
                caught: 0,
            },
        );
    }

    world
}

fn random_point(rng: &mut impl Rng, width: f32, height: f32) -> (f32, f32) {
    (rng.random::<f32>() * width, rng.random::<f32>() * height)
}

/// Member under the world point `(x, y)`, preferring the one drawn on top.
pub fn pick(world: &World, (x, y): (f32, f32)) -> Option<ActorId> {
    world
        .actors()
        .filter(|actor| {
            distance(x, y, actor.x(), actor.y()) <= actor.width().max(actor.height()) / 2.0
        })
        .max_by(|a, b| a.z().total_cmp(&b.z()))
        .map(Actor::id)
}
