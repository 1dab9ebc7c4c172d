use crate::model;
use crate::relay::{self, NodeRecord, global_id};
use async_graphql::{ID, InputObject, Interface, Object, SimpleObject};

use super::viewer::Viewer;

/// Relay object identification.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID", desc = "The ID of the object."))]
pub enum Node {
    User(Viewer),
    Todo(Todo),
}

impl From<NodeRecord> for Node {
    fn from(record: NodeRecord) -> Self {
        match record {
            NodeRecord::Viewer => Node::User(Viewer),
            NodeRecord::Todo(todo) => Node::Todo(todo.into()),
        }
    }
}

#[derive(Clone)]
pub struct Todo(model::Todo);

impl From<model::Todo> for Todo {
    fn from(t: model::Todo) -> Self {
        Todo(t)
    }
}

#[Object]
impl Todo {
    pub async fn id(&self) -> ID {
        ID(global_id::encode_todo(self.0.id))
    }

    async fn text(&self) -> &str {
        &self.0.text
    }

    async fn complete(&self) -> bool {
        self.0.complete
    }
}

#[derive(SimpleObject)]
pub struct TodoEdge {
    pub node: Todo,
    pub cursor: String,
}

impl From<relay::Edge<model::Todo>> for TodoEdge {
    fn from(e: relay::Edge<model::Todo>) -> Self {
        TodoEdge {
            node: e.node.into(),
            cursor: e.cursor,
        }
    }
}

#[derive(SimpleObject)]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
}

impl From<relay::PageInfo> for PageInfo {
    fn from(p: relay::PageInfo) -> Self {
        PageInfo {
            has_next_page: p.has_next_page,
            has_previous_page: p.has_previous_page,
            start_cursor: p.start_cursor,
            end_cursor: p.end_cursor,
        }
    }
}

#[derive(SimpleObject)]
pub struct TodoConnection {
    pub edges: Vec<TodoEdge>,
    pub page_info: PageInfo,
}

impl From<relay::Connection<model::Todo>> for TodoConnection {
    fn from(c: relay::Connection<model::Todo>) -> Self {
        TodoConnection {
            edges: c.edges.into_iter().map(TodoEdge::from).collect(),
            page_info: c.page_info.into(),
        }
    }
}

#[derive(InputObject)]
pub struct AddTodoInput {
    pub text: String,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct AddTodoPayload {
    pub todo_edge: TodoEdge,
    pub viewer: Viewer,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct RenameTodoInput {
    pub id: ID,
    pub text: String,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct RenameTodoPayload {
    pub todo: Todo,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct ChangeTodoStatusInput {
    pub id: ID,
    pub complete: bool,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct ChangeTodoStatusPayload {
    pub todo: Todo,
    pub viewer: Viewer,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct MarkAllTodosInput {
    pub complete: bool,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct MarkAllTodosPayload {
    pub changed_todos: Vec<Todo>,
    pub viewer: Viewer,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct RemoveTodoInput {
    pub id: ID,
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct RemoveTodoPayload {
    pub deleted_todo_id: ID,
    pub viewer: Viewer,
    pub client_mutation_id: Option<String>,
}

#[derive(InputObject)]
pub struct RemoveCompletedTodosInput {
    pub client_mutation_id: Option<String>,
}

#[derive(SimpleObject)]
pub struct RemoveCompletedTodosPayload {
    pub deleted_todo_ids: Vec<ID>,
    pub viewer: Viewer,
    pub client_mutation_id: Option<String>,
}
