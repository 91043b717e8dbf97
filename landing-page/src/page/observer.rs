use bevy::ecs::component::HookContext;
use bevy::ecs::world::DeferredWorld;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::reveal::INTERSECTION_THRESHOLD;

use crate::page::reveal::{CardReveal, RevealPhase};

/// Number of live viewport observers.
#[derive(Resource, Default, Debug)]
pub struct ObserverRegistry {
    active: usize,
}

impl ObserverRegistry {
    pub fn active(&self) -> usize {
        self.active
    }
}

/// Marks a node whose intersection with the window is measured every frame.
/// Registration follows the component's lifetime.
#[derive(Component)]
#[component(on_add = register_observer, on_remove = deregister_observer)]
pub struct ViewportObserver;

fn register_observer(mut world: DeferredWorld, _context: HookContext) {
    if let Some(mut registry) = world.get_resource_mut::<ObserverRegistry>() {
        registry.active += 1;
    }
}

fn deregister_observer(mut world: DeferredWorld, _context: HookContext) {
    if let Some(mut registry) = world.get_resource_mut::<ObserverRegistry>() {
        registry.active = registry.active.saturating_sub(1);
    }
}

/// Fraction of `target`'s area inside `viewport`. Empty targets never intersect.
pub fn intersection_ratio(target: Rect, viewport: Rect) -> f32 {
    let area = target.width() * target.height();
    if area <= 0.0 || !area.is_finite() {
        return 0.0;
    }

    let overlap = target.intersect(viewport);
    if overlap.is_empty() {
        return 0.0;
    }
    (overlap.width() * overlap.height() / area).clamp(0.0, 1.0)
}

/// Feeds each hidden card its current intersection with the window. Nodes
/// without a laid-out size yet are skipped.
pub fn observe_card_intersections(
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cards: Query<(&ComputedNode, &GlobalTransform, &mut CardReveal), With<ViewportObserver>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let viewport = Rect::from_corners(Vec2::ZERO, window.physical_size().as_vec2());

    for (node, transform, mut reveal) in &mut cards {
        if reveal.phase() != RevealPhase::Hidden {
            continue;
        }
        let size = node.size();
        if size.x <= 0.0 || size.y <= 0.0 {
            continue;
        }

        let target = Rect::from_center_size(transform.translation().truncate(), size);
        let ratio = intersection_ratio(target, viewport);
        if ratio < INTERSECTION_THRESHOLD {
            continue;
        }
        if reveal.observe_intersection(ratio, time.elapsed()) {
            debug!("Feature card entered the viewport ({:.0}% visible)", ratio * 100.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::page::reveal::{CardRevealed, FeatureCard, tick_card_reveals};

    #[derive(Resource, Default)]
    struct RevealLog(Vec<(usize, Duration)>);

    fn record_reveals(
        time: Res<Time>,
        mut revealed: EventReader<CardRevealed>,
        mut log: ResMut<RevealLog>,
    ) {
        for event in revealed.read() {
            log.0.push((event.index, time.elapsed()));
        }
    }

    /// Window plus the observe -> tick chain the page runs every frame.
    fn observed_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>()
            .init_resource::<ObserverRegistry>()
            .init_resource::<RevealLog>()
            .add_event::<CardRevealed>()
            .add_systems(
                Update,
                (observe_card_intersections, tick_card_reveals, record_reveals).chain(),
            );
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app
    }

    fn spawn_card(app: &mut App, index: usize, delay_ms: u64, center: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                FeatureCard { index },
                CardReveal::new(Duration::from_millis(delay_ms)),
                ViewportObserver,
                ComputedNode {
                    size: Vec2::new(300.0, 300.0),
                    ..default()
                },
                GlobalTransform::from_translation(center.extend(0.0)),
            ))
            .id()
    }

    fn step(app: &mut App, delta: Duration) {
        app.world_mut().resource_mut::<Time>().advance_by(delta);
        app.update();
    }

    const OFF_SCREEN: Vec2 = Vec2::new(400.0, 2000.0);
    const ON_SCREEN: Vec2 = Vec2::new(400.0, 400.0);

    #[test]
    fn time_before_the_crossing_does_not_count_towards_the_delay() {
        let mut app = observed_app();
        let card = spawn_card(&mut app, 2, 400, OFF_SCREEN);

        step(&mut app, Duration::from_millis(450));
        assert_eq!(app.world().get::<CardReveal>(card).unwrap().phase(), RevealPhase::Hidden);

        // Scrolled into view during a long frame.
        app.world_mut()
            .entity_mut(card)
            .insert(GlobalTransform::from_translation(ON_SCREEN.extend(0.0)));
        step(&mut app, Duration::from_millis(450));
        let crossed_at = Duration::from_millis(900);
        assert_eq!(
            app.world().get::<CardReveal>(card).unwrap().phase(),
            RevealPhase::Pending { crossed_at }
        );
        assert!(app.world().resource::<RevealLog>().0.is_empty());

        step(&mut app, Duration::from_millis(450));
        let log = &app.world().resource::<RevealLog>().0;
        assert_eq!(log.len(), 1);
        assert!(log[0].1 >= crossed_at + Duration::from_millis(400));
    }

    #[test]
    fn short_frames_reveal_no_earlier_than_the_delay() {
        let mut app = observed_app();
        let card = spawn_card(&mut app, 1, 200, OFF_SCREEN);

        for _ in 0..5 {
            step(&mut app, Duration::from_millis(16));
        }
        app.world_mut()
            .entity_mut(card)
            .insert(GlobalTransform::from_translation(ON_SCREEN.extend(0.0)));
        let crossed_at = Duration::from_millis(16 * 6);
        for _ in 0..30 {
            step(&mut app, Duration::from_millis(16));
        }

        let log = &app.world().resource::<RevealLog>().0;
        assert_eq!(log.len(), 1);
        assert!(log[0].1 >= crossed_at + Duration::from_millis(200));
        assert!(log[0].1 < crossed_at + Duration::from_millis(216));
    }

    #[test]
    fn zero_delay_cards_reveal_in_the_crossing_frame() {
        let mut app = observed_app();
        spawn_card(&mut app, 0, 0, ON_SCREEN);

        step(&mut app, Duration::from_millis(16));
        let log = &app.world().resource::<RevealLog>().0;
        assert_eq!(log.as_slice(), &[(0, Duration::from_millis(16))]);
    }

    const WINDOW: Rect = Rect {
        min: Vec2::ZERO,
        max: Vec2::new(1440.0, 900.0),
    };

    #[test]
    fn ratio_covers_inside_partial_and_outside() {
        let inside = Rect::from_corners(Vec2::new(100.0, 100.0), Vec2::new(400.0, 400.0));
        assert_eq!(intersection_ratio(inside, WINDOW), 1.0);

        // Top tenth of a card peeking over the bottom edge.
        let peeking = Rect::from_corners(Vec2::new(100.0, 870.0), Vec2::new(400.0, 1170.0));
        assert!((intersection_ratio(peeking, WINDOW) - 0.1).abs() < 1e-5);

        let below = Rect::from_corners(Vec2::new(100.0, 1000.0), Vec2::new(400.0, 1300.0));
        assert_eq!(intersection_ratio(below, WINDOW), 0.0);
    }

    #[test]
    fn empty_targets_never_intersect() {
        let empty = Rect::from_corners(Vec2::new(10.0, 10.0), Vec2::new(10.0, 10.0));
        assert_eq!(intersection_ratio(empty, WINDOW), 0.0);
    }

    #[test]
    fn registry_follows_observer_lifetimes() {
        let mut world = World::new();
        world.init_resource::<ObserverRegistry>();

        let observers: Vec<Entity> = (0..3).map(|_| world.spawn(ViewportObserver).id()).collect();
        assert_eq!(world.resource::<ObserverRegistry>().active(), 3);

        world.despawn(observers[0]);
        assert_eq!(world.resource::<ObserverRegistry>().active(), 2);

        world.entity_mut(observers[1]).remove::<ViewportObserver>();
        world.despawn(observers[1]);
        world.despawn(observers[2]);
        assert_eq!(world.resource::<ObserverRegistry>().active(), 0);
    }
}
