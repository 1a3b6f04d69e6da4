//! 虚拟文件系统：平坦节点池 + 父指针
//!
//! 工作区内容只存在于内存中，不落盘。节点由带代数的 slotmap key 标识，
//! 删除后 id 永不复用；同级名称按小写比较保持唯一。

use compact_str::CompactString;
use rustc_hash::FxHashSet;
use slotmap::{new_key_type, SlotMap};
use std::collections::BTreeMap;
use std::fmt;

pub mod language;
pub mod merge;
mod path;

pub use merge::{GeneratedFile, MergeApplied, MergeBatch, MergeOutcome};

new_key_type! { pub struct NodeId; }

/// 根节点的显示名（新建工作区时使用）
pub const ROOT_NAME: &str = "TERMINAL HOME";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    File,
    Dir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkspaceError {
    DuplicateName,
    InvalidName,
    ProtectedRoot,
    InvalidNodeId,
    ParentNotDirectory,
}

impl fmt::Display for WorkspaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkspaceError::DuplicateName => write!(f, "name already exists in parent"),
            WorkspaceError::InvalidName => write!(f, "invalid name"),
            WorkspaceError::ProtectedRoot => write!(f, "the workspace root cannot be changed"),
            WorkspaceError::InvalidNodeId => write!(f, "invalid node id"),
            WorkspaceError::ParentNotDirectory => write!(f, "parent is not a directory"),
        }
    }
}

impl std::error::Error for WorkspaceError {}

/// 树节点：仅存 basename 和父指针，完整路径按需推导
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: Kind,
    pub name: CompactString,
    pub parent: Option<NodeId>,
    /// 仅目录有值；按小写名索引，同级唯一性由 map key 保证
    children: Option<BTreeMap<CompactString, NodeId>>,
    pub content: String,          // 仅文件
    pub language: CompactString,  // 仅文件
    pub modified: bool,           // 仅文件；提交模拟时统一清零
}

impl Node {
    fn new_file(name: &str, parent: NodeId, content: String, language: CompactString) -> Self {
        Self {
            kind: Kind::File,
            name: name.into(),
            parent: Some(parent),
            children: None,
            content,
            language,
            modified: true,
        }
    }

    fn new_dir(name: &str, parent: Option<NodeId>) -> Self {
        Self {
            kind: Kind::Dir,
            name: name.into(),
            parent,
            children: Some(BTreeMap::new()),
            content: String::new(),
            language: CompactString::default(),
            modified: false,
        }
    }
}

fn fold_name(name: &str) -> CompactString {
    CompactString::from(name.to_lowercase())
}

/// 工作区：节点池 + 视图状态（展开集合、活动文件）
pub struct Workspace {
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    expanded: FxHashSet<NodeId>,
    active: Option<NodeId>,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}

impl Workspace {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new_dir(ROOT_NAME, None));

        let mut expanded = FxHashSet::default();
        expanded.insert(root); // 根目录默认展开

        Self {
            arena,
            root,
            expanded,
            active: None,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.arena.get(id)
    }

    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    pub fn active_node(&self) -> Option<&Node> {
        self.arena.get(self.active?)
    }

    /// 绑定活动文件；目录和未知 id 被拒绝
    pub fn set_active(&mut self, id: Option<NodeId>) -> bool {
        let next = match id {
            None => None,
            Some(i) if self.arena.get(i).is_some_and(|n| n.kind == Kind::File) => Some(i),
            Some(_) => return false,
        };
        if self.active == next {
            return false;
        }
        self.active = next;
        true
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    pub fn is_dir(&self, id: NodeId) -> bool {
        self.arena.get(id).is_some_and(|n| n.kind == Kind::Dir)
    }

    /// 子节点迭代器（按小写名排序）；文件节点产生空迭代
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.arena
            .get(id)
            .and_then(|n| n.children.as_ref())
            .into_iter()
            .flat_map(|m| m.values().copied())
    }

    pub fn child_count(&self, id: NodeId) -> usize {
        self.arena
            .get(id)
            .and_then(|n| n.children.as_ref())
            .map_or(0, |m| m.len())
    }

    /// 按名称（忽略大小写）查找直接子节点
    pub fn child_named(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.arena
            .get(parent)?
            .children
            .as_ref()?
            .get(&fold_name(name))
            .copied()
    }

    /// 只读预检 + 两段写入（避免同时可变借用父子节点）
    fn insert_node(&mut self, parent: NodeId, node: Node) -> Result<NodeId, WorkspaceError> {
        let key = fold_name(&node.name);
        {
            let parent_ro = self
                .arena
                .get(parent)
                .ok_or(WorkspaceError::InvalidNodeId)?;
            let children_ro = parent_ro
                .children
                .as_ref()
                .ok_or(WorkspaceError::ParentNotDirectory)?;
            if children_ro.contains_key(&key) {
                return Err(WorkspaceError::DuplicateName);
            }
        }

        let id = self.arena.insert(node);

        let parent_node = self
            .arena
            .get_mut(parent)
            .ok_or(WorkspaceError::InvalidNodeId)?;
        let children = parent_node
            .children
            .as_mut()
            .ok_or(WorkspaceError::ParentNotDirectory)?;
        children.insert(key, id);

        Ok(id)
    }

    /// 插入文件节点：父目录强制展开，modified 置位
    pub(crate) fn insert_file(
        &mut self,
        parent: NodeId,
        name: &str,
        content: String,
        language: CompactString,
    ) -> Result<NodeId, WorkspaceError> {
        if name.is_empty() {
            return Err(WorkspaceError::InvalidName);
        }
        let id = self.insert_node(parent, Node::new_file(name, parent, content, language))?;
        self.expanded.insert(parent);
        Ok(id)
    }

    /// 新建文件：按扩展名生成种子内容与语言标记，并设为活动文件
    pub fn create_file(
        &mut self,
        parent: Option<NodeId>,
        name: &str,
    ) -> Result<NodeId, WorkspaceError> {
        let parent = parent.unwrap_or(self.root);
        let content = language::template_for_name(name).to_string();
        let tag = language::language_tag(name);
        let id = self.insert_file(parent, name, content, tag)?;
        self.active = Some(id);
        Ok(id)
    }

    /// 新建目录：目录名不得含 '.'；新目录与父目录都展开
    pub fn create_folder(
        &mut self,
        parent: Option<NodeId>,
        name: &str,
    ) -> Result<NodeId, WorkspaceError> {
        let parent = parent.unwrap_or(self.root);
        if name.is_empty() || name.contains('.') {
            return Err(WorkspaceError::InvalidName);
        }
        let id = self.insert_node(parent, Node::new_dir(name, Some(parent)))?;
        self.expanded.insert(id);
        self.expanded.insert(parent);
        Ok(id)
    }

    /// 重命名：根节点受保护；同名直接成功；大小写冲突视为重名
    pub fn rename(&mut self, id: NodeId, new_name: &str) -> Result<(), WorkspaceError> {
        if id == self.root {
            return Err(WorkspaceError::ProtectedRoot);
        }
        let (parent, old_name) = {
            let node = self.arena.get(id).ok_or(WorkspaceError::InvalidNodeId)?;
            (node.parent, node.name.clone())
        };

        if old_name == new_name {
            return Ok(());
        }
        if new_name.is_empty() {
            return Err(WorkspaceError::InvalidName);
        }

        let parent_id = parent.ok_or(WorkspaceError::ProtectedRoot)?;
        {
            let parent_node = self
                .arena
                .get_mut(parent_id)
                .ok_or(WorkspaceError::InvalidNodeId)?;
            let children = parent_node
                .children
                .as_mut()
                .ok_or(WorkspaceError::ParentNotDirectory)?;

            let new_key = fold_name(new_name);
            if children.contains_key(&new_key) {
                return Err(WorkspaceError::DuplicateName);
            }
            children.remove(&fold_name(&old_name));
            children.insert(new_key, id);
        }

        self.arena
            .get_mut(id)
            .ok_or(WorkspaceError::InvalidNodeId)?
            .name = new_name.into();
        Ok(())
    }

    /// 删除节点及其整个子树；根节点和未知 id 为 no-op
    pub fn delete(&mut self, id: NodeId) {
        if id == self.root {
            return;
        }
        let Some((parent, name)) = self.arena.get(id).map(|n| (n.parent, n.name.clone())) else {
            return;
        };

        if let Some(parent_id) = parent {
            if let Some(children) = self
                .arena
                .get_mut(parent_id)
                .and_then(|n| n.children.as_mut())
            {
                children.remove(&fold_name(&name));
            }
        }

        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if let Some(node) = self.arena.get(id).cloned() {
            if let Some(children) = node.children {
                for (_, child_id) in children {
                    self.remove_subtree(child_id);
                }
            }

            self.expanded.remove(&id);
            if self.active == Some(id) {
                self.active = None;
            }
            self.arena.remove(id);
        }
    }

    /// 切换目录展开/折叠；文件与未知 id 为 no-op
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        if !self.is_dir(id) {
            return false;
        }
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
        true
    }

    /// 更新文件内容并置 modified；未知 id 或目录为 no-op
    pub fn update_file_content(&mut self, id: NodeId, content: &str) -> bool {
        match self.arena.get_mut(id) {
            Some(node) if node.kind == Kind::File => {
                node.content = content.to_string();
                node.modified = true;
                true
            }
            _ => false,
        }
    }

    /// 提交模拟：清除所有文件的 modified 标记
    pub fn mark_all_committed(&mut self) {
        for node in self.arena.values_mut() {
            if node.kind == Kind::File {
                node.modified = false;
            }
        }
    }

    pub fn has_uncommitted(&self) -> bool {
        self.arena
            .values()
            .any(|n| n.kind == Kind::File && n.modified)
    }

    /// 重置工作区：只留一个全新的根节点
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// 先序收集所有文件 id（目录在前的展示顺序不影响此列表）
    pub fn files(&self) -> Vec<NodeId> {
        let mut result = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.arena.get(id) {
                match node.kind {
                    Kind::File => result.push(id),
                    Kind::Dir => {
                        for child in self.children(id).collect::<Vec<_>>().into_iter().rev() {
                            stack.push(child);
                        }
                    }
                }
            }
        }
        result
    }
}

/// 渲染用的扁平化行结构
#[derive(Debug, Clone)]
pub struct Row {
    pub id: NodeId,
    pub depth: u16,
    pub name: CompactString,
    pub is_dir: bool,
    pub is_expanded: bool,
}

impl Workspace {
    /// 将树按展开状态拍扁成列表；目录排在文件前面
    pub fn visible_rows(&self) -> Vec<Row> {
        let mut result = Vec::new();
        let mut stack: Vec<(NodeId, u16)> = vec![(self.root, 0)];

        while let Some((id, depth)) = stack.pop() {
            if id != self.root {
                if let Some(node) = self.arena.get(id) {
                    result.push(Row {
                        id,
                        depth,
                        name: node.name.clone(),
                        is_dir: node.kind == Kind::Dir,
                        is_expanded: self.expanded.contains(&id),
                    });
                }
            }

            if self.expanded.contains(&id) {
                let mut dirs = Vec::new();
                let mut files = Vec::new();
                for child_id in self.children(id) {
                    if let Some(child) = self.arena.get(child_id) {
                        if child.kind == Kind::Dir {
                            dirs.push(child_id);
                        } else {
                            files.push(child_id);
                        }
                    }
                }
                for file_id in files.into_iter().rev() {
                    stack.push((file_id, depth + 1));
                }
                for dir_id in dirs.into_iter().rev() {
                    stack.push((dir_id, depth + 1));
                }
            }
        }

        result
    }
}
