//! Interaction dispatcher
//!
//! A dispatch table from entity-kind pairs to contact handlers, registered
//! once when the world is built. The physics service decides *what touched*;
//! this table decides *what happens*.

use super::entity::EntityKind;
use super::handlers;
use super::state::World;
use crate::error::SimError;
use crate::physics::{Contact, PhysicsService, Relation, Response};
use crate::timer::Scheduler;

/// External services a handler may drive
pub struct Services<'a> {
    pub physics: &'a mut dyn PhysicsService,
    pub scheduler: &'a mut dyn Scheduler,
}

/// Gameplay response to a contact
pub type ContactHandler = fn(&mut World, &mut Services<'_>, &Contact) -> Result<(), SimError>;

#[derive(Debug, Clone, Copy)]
struct Binding {
    a: EntityKind,
    b: EntityKind,
    handler: ContactHandler,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionDispatcher {
    relations: Vec<Relation>,
    bindings: Vec<Binding>,
}

impl InteractionDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game's table: everything stands on platforms, the player
    /// picks up stars and dies on bombs
    pub fn standard() -> Self {
        use EntityKind::*;

        let mut dispatcher = Self::new();
        dispatcher
            .collider(Player, Platform)
            .collider(Collectible, Platform)
            .collider(Hazard, Platform)
            .collider_with(Player, Hazard, handlers::hit_bomb)
            .overlap(Player, Collectible, handlers::collect_star);
        dispatcher
    }

    /// Solid pair with no gameplay effect
    pub fn collider(&mut self, a: EntityKind, b: EntityKind) -> &mut Self {
        self.relations.push(Relation {
            a,
            b,
            response: Response::Collide,
            notify: false,
        });
        self
    }

    /// Solid pair that runs `handler` on contact
    pub fn collider_with(&mut self, a: EntityKind, b: EntityKind, handler: ContactHandler) -> &mut Self {
        self.relations.push(Relation {
            a,
            b,
            response: Response::Collide,
            notify: true,
        });
        self.bindings.push(Binding { a, b, handler });
        self
    }

    /// Pass-through pair that runs `handler` on contact
    pub fn overlap(&mut self, a: EntityKind, b: EntityKind, handler: ContactHandler) -> &mut Self {
        self.relations.push(Relation {
            a,
            b,
            response: Response::Overlap,
            notify: true,
        });
        self.bindings.push(Binding { a, b, handler });
        self
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn handler_for(&self, a: EntityKind, b: EntityKind) -> Option<ContactHandler> {
        self.bindings
            .iter()
            .find(|binding| binding.a == a && binding.b == b)
            .map(|binding| binding.handler)
    }
}

/// Run handlers for this tick's contacts.
///
/// Contacts are handled in entity-id order. A contact is skipped if either
/// entity is no longer active, or if it names a star and the star row was
/// refilled earlier in the same pass (its position data is stale).
/// Returns the number of handlers run.
pub fn dispatch(world: &mut World, services: &mut Services<'_>, contacts: &mut Vec<Contact>) -> Result<usize, SimError> {
    contacts.sort();
    contacts.dedup();

    let generation = world.collectibles.generation();
    let mut handled = 0;

    for contact in contacts.iter() {
        let Some(handler) = world.dispatcher.handler_for(contact.a.kind, contact.b.kind) else {
            continue;
        };
        if !world.is_active(contact.a) || !world.is_active(contact.b) {
            log::trace!("Skipping contact with inactive entity: {:?}", contact);
            continue;
        }
        let names_star = contact.a.kind == EntityKind::Collectible || contact.b.kind == EntityKind::Collectible;
        if names_star && world.collectibles.generation() != generation {
            log::trace!("Skipping stale star contact after refill: {:?}", contact);
            continue;
        }

        handler(world, services, contact)?;
        handled += 1;
    }

    Ok(handled)
}
