use tabled::Table;

use crate::{
    backend::{self, BackendClient},
    drops::{build_new_drops, filter_by_mood, group_drops},
    error, info,
    management::DropStore,
    spotify::{LinkResolver, ResourceType},
    success,
    utils::{self, Moods},
    warning,
};

pub async fn add_drop(
    resolver: &LinkResolver,
    url: &str,
    moods: &Moods,
    drop_type: Option<ResourceType>,
) {
    if let (Some(chosen), Ok(reference)) = (drop_type, resolver.validate(url)) {
        if chosen != reference.resource_type {
            warning!(
                "Link points to a {}, but the drop will be saved as {}",
                reference.resource_type,
                chosen
            );
        }
    }

    let new_drops = match build_new_drops(resolver, url, moods, drop_type) {
        Ok(drops) => drops,
        Err(e) => error!("Cannot create drop: {}", e),
    };

    let client = match BackendClient::from_config() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let pb = utils::spinner("Dropping...");
    let created = backend::drops::insert(&client, &new_drops).await;
    pb.finish_and_clear();

    let created = match created {
        Ok(rows) => rows,
        Err(e) => error!("Failed to save drop. Err: {}", e),
    };

    success!(
        "Dropped {} with mood{} {}",
        new_drops[0].drop_type,
        if moods.len() == 1 { "" } else { "s" },
        moods
    );

    let mut store = DropStore::load_or_default().await;
    store.add(created);
    if let Err(e) = store.persist().await {
        warning!("Failed to cache drop. Err: {}", e);
    }
}

pub async fn sync_drops(limit: u32) {
    let client = match BackendClient::from_config() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let pb = utils::spinner("Fetching recent drops...");
    let fetched = backend::drops::fetch_recent(&client, limit).await;
    pb.finish_and_clear();

    let fetched = match fetched {
        Ok(rows) => rows,
        Err(e) => error!("Failed to fetch drops. Err: {}", e),
    };

    let mut store = DropStore::load_or_default().await;
    store.replace(fetched);
    if let Err(e) = store.persist().await {
        error!("Failed to cache drops. Err: {}", e);
    }

    success!("Cached {} drops", store.count());
}

pub async fn list_drops(mood: Option<String>) {
    let store = match DropStore::load().await {
        Ok(store) => store,
        Err(e) => {
            warning!("No cached drops ({}). Run mooddrop drops sync.", e);
            return;
        }
    };

    let mut groups = group_drops(store.all());
    if let Some(mood) = &mood {
        filter_by_mood(&mut groups, mood);
    }
    utils::sort_grouped_drops(&mut groups);

    if groups.is_empty() {
        info!("Nothing dropped here yet.");
        return;
    }

    println!("{}", Table::new(utils::to_table_rows(&groups)));
}
