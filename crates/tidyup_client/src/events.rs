use bevy::prelude::*;

// --- Events ---

#[derive(Event)]
pub struct ItemPickedUpEvent {
    pub item: usize,
    pub avatar: Vec3,
}

#[derive(Event)]
pub struct ItemDroppedEvent {
    pub item: usize,
    pub position: Vec3,
    pub avatar: Vec3,
}

#[derive(Event)]
pub struct ItemDepositedEvent {
    pub item: usize,
    pub bin: usize,
    pub avatar: Vec3,
    pub remaining: usize,
}

#[derive(Event)]
pub struct AvatarRespawnedEvent {
    pub fell_at: Vec3,
    pub position: Vec3,
}

#[derive(Event)]
pub struct LevelClearedEvent {
    pub level: &'static str,
    pub items: usize,
}

// --- Plugin trait ---

#[allow(unused_variables)]
pub trait TidyPlugin: Send + Sync + 'static {
    fn on_item_picked_up(&self, event: &ItemPickedUpEvent) {}
    fn on_item_dropped(&self, event: &ItemDroppedEvent) {}
    fn on_item_deposited(&self, event: &ItemDepositedEvent) {}
    fn on_avatar_respawned(&self, event: &AvatarRespawnedEvent) {}
    fn on_level_cleared(&self, event: &LevelClearedEvent) {}
}

// --- Registry ---

#[derive(Resource)]
struct PluginRegistry {
    plugins: Vec<Box<dyn TidyPlugin>>,
}

// --- Dispatch systems ---

fn dispatch_item_picked_up(
    mut reader: EventReader<ItemPickedUpEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_picked_up(event);
        }
    }
}

fn dispatch_item_dropped(mut reader: EventReader<ItemDroppedEvent>, registry: Res<PluginRegistry>) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_dropped(event);
        }
    }
}

fn dispatch_item_deposited(
    mut reader: EventReader<ItemDepositedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_item_deposited(event);
        }
    }
}

fn dispatch_avatar_respawned(
    mut reader: EventReader<AvatarRespawnedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_avatar_respawned(event);
        }
    }
}

fn dispatch_level_cleared(
    mut reader: EventReader<LevelClearedEvent>,
    registry: Res<PluginRegistry>,
) {
    for event in reader.read() {
        for plugin in &registry.plugins {
            plugin.on_level_cleared(event);
        }
    }
}

// --- EventsPlugin builder ---

pub struct EventsPlugin {
    plugins: std::sync::Mutex<Vec<Box<dyn TidyPlugin>>>,
}

impl EventsPlugin {
    pub fn new_with(plugins: Vec<Box<dyn TidyPlugin>>) -> Self {
        Self {
            plugins: std::sync::Mutex::new(plugins),
        }
    }
}

impl Plugin for EventsPlugin {
    fn build(&self, app: &mut App) {
        let plugins = self
            .plugins
            .lock()
            .map(|mut plugins| plugins.drain(..).collect())
            .unwrap_or_default();
        app.insert_resource(PluginRegistry { plugins });

        app.add_event::<ItemPickedUpEvent>()
            .add_event::<ItemDroppedEvent>()
            .add_event::<ItemDepositedEvent>()
            .add_event::<AvatarRespawnedEvent>()
            .add_event::<LevelClearedEvent>()
            .add_systems(
                Update,
                (
                    dispatch_item_picked_up,
                    dispatch_item_dropped,
                    dispatch_item_deposited,
                    dispatch_avatar_respawned,
                    dispatch_level_cleared,
                ),
            );
    }
}
