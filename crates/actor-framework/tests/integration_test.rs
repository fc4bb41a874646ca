use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Tab {
    id: u32,
    table: u8,
    items: Vec<String>,
    open: bool,
}

#[derive(Debug)]
struct TabCreate {
    table: u8,
}

#[derive(Debug)]
struct TabUpdate {
    table: Option<u8>,
}

#[derive(Debug)]
enum TabAction {
    Order(String),
    /// Appends every item, failing on the first blank one.
    OrderAll(Vec<String>),
    Close,
}

#[derive(Debug)]
enum TabQuery {
    Open,
    AtTable(u8),
}

#[derive(Debug, thiserror::Error, PartialEq)]
enum TabError {
    #[error("table {0} does not exist")]
    NoSuchTable(u8),
    #[error("blank item")]
    BlankItem,
    #[error("tab is closed")]
    Closed,
}

#[async_trait]
impl ActorEntity for Tab {
    type Id = u32;
    type Create = TabCreate;
    type Update = TabUpdate;
    type Action = TabAction;
    type ActionResult = usize;
    type Query = TabQuery;
    type Context = ();
    type Error = TabError;

    fn from_create_params(id: u32, params: TabCreate) -> Result<Self, Self::Error> {
        if params.table == 0 {
            return Err(TabError::NoSuchTable(0));
        }
        Ok(Self {
            id,
            table: params.table,
            items: Vec::new(),
            open: true,
        })
    }

    async fn on_update(&mut self, update: TabUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(table) = update.table {
            self.table = table;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TabAction, _ctx: &()) -> Result<usize, Self::Error> {
        if !self.open {
            return Err(TabError::Closed);
        }
        match action {
            TabAction::Order(item) => self.push(item)?,
            TabAction::OrderAll(items) => {
                for item in items {
                    self.push(item)?;
                }
            }
            TabAction::Close => self.open = false,
        }
        Ok(self.items.len())
    }

    fn matches(&self, query: &TabQuery) -> bool {
        match query {
            TabQuery::Open => self.open,
            TabQuery::AtTable(table) => self.table == *table,
        }
    }
}

impl Tab {
    fn push(&mut self, item: String) -> Result<(), TabError> {
        if item.trim().is_empty() {
            return Err(TabError::BlankItem);
        }
        self.items.push(item);
        Ok(())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let id: u32 = client.create(TabCreate { table: 4 }).await.unwrap();
    assert_eq!(id, 1);

    let count = client
        .perform_action(id, TabAction::Order("soup".into()))
        .await
        .unwrap();
    assert_eq!(count, 1);

    let moved = client.update(id, TabUpdate { table: Some(7) }).await.unwrap();
    assert_eq!(moved.table, 7);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn rejected_create_still_consumes_an_id() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(TabCreate { table: 0 }).await.unwrap_err();
    assert_eq!(err.downcast_entity::<TabError>().unwrap(), TabError::NoSuchTable(0));

    assert_eq!(client.create(TabCreate { table: 1 }).await.unwrap(), 2);
}

#[tokio::test]
async fn failed_action_leaves_stored_entity_untouched() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));
    let id = client.create(TabCreate { table: 2 }).await.unwrap();

    // The first item is applied to the working copy before the blank one fails.
    let err = client
        .perform_action(id, TabAction::OrderAll(vec!["bread".into(), " ".into()]))
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<TabError>().unwrap(), TabError::BlankItem);

    let tab = client.get(id).await.unwrap().unwrap();
    assert!(tab.items.is_empty());
}

#[tokio::test]
async fn query_filters_with_matches() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    tokio::spawn(actor.run(()));

    let first = client.create(TabCreate { table: 3 }).await.unwrap();
    let second = client.create(TabCreate { table: 3 }).await.unwrap();
    client.create(TabCreate { table: 5 }).await.unwrap();
    client.perform_action(second, TabAction::Close).await.unwrap();

    let mut at_three: Vec<u32> = client
        .query(TabQuery::AtTable(3))
        .await
        .unwrap()
        .into_iter()
        .map(|tab| tab.id)
        .collect();
    at_three.sort();
    assert_eq!(at_three, vec![first, second]);

    let open = client.query(TabQuery::Open).await.unwrap();
    assert_eq!(open.len(), 2);
    assert!(open.iter().all(|tab| tab.id != second));
}

#[tokio::test]
async fn missing_entity_and_closed_actor_errors() {
    let (actor, client) = ResourceActor::<Tab>::new(10);
    let handle = tokio::spawn(actor.run(()));

    let err = client
        .perform_action(42, TabAction::Close)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "42"));

    // A transport error is handed back unchanged by downcast_entity.
    let err = err.downcast_entity::<TabError>().unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));

    let late = client.clone();
    drop(client);
    handle.abort();
    let _ = handle.await;
    assert!(matches!(
        late.get(1).await,
        Err(FrameworkError::ActorClosed)
    ));
}
