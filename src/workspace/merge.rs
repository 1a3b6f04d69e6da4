//! 生成文件批次的合并引擎
//!
//! 对每个条目执行 create-or-update：已存在的文件原地更新（保留 NodeId，
//! 打开中的编辑器不丢绑定），不存在则新建，缺失的目录链按需创建。
//! `MergeBatch` 是迭代器，每次 `next()` 恰好落一个条目，调用方可以在
//! 条目之间回到自己的循环里做进度展示。

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

use super::{language, Kind, NodeId, Workspace};

/// AI 协作方产出的单个文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeApplied {
    Created,
    Updated,
    Skipped,
}

#[derive(Debug, Clone)]
pub struct MergeOutcome {
    pub path: String,
    pub applied: MergeApplied,
    pub node: Option<NodeId>,
}

pub struct MergeBatch<'a> {
    workspace: &'a mut Workspace,
    entries: std::vec::IntoIter<GeneratedFile>,
}

impl Iterator for MergeBatch<'_> {
    type Item = MergeOutcome;

    fn next(&mut self) -> Option<MergeOutcome> {
        let entry = self.entries.next()?;
        Some(self.workspace.apply_generated(entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl ExactSizeIterator for MergeBatch<'_> {}

impl Workspace {
    /// 逐条目合并；空批次立即耗尽，等价于 no-op
    pub fn merge(&mut self, batch: Vec<GeneratedFile>) -> MergeBatch<'_> {
        MergeBatch {
            workspace: self,
            entries: batch.into_iter(),
        }
    }

    /// 一次性合并整个批次
    pub fn merge_all(&mut self, batch: Vec<GeneratedFile>) -> Vec<MergeOutcome> {
        self.merge(batch).collect()
    }

    fn apply_generated(&mut self, entry: GeneratedFile) -> MergeOutcome {
        let skipped = |path: String| MergeOutcome {
            path,
            applied: MergeApplied::Skipped,
            node: None,
        };

        let clean = entry.path.strip_prefix("./").unwrap_or(&entry.path);
        let mut segments: Vec<&str> = clean.split('/').filter(|s| !s.is_empty()).collect();
        let Some(file_name) = segments.pop() else {
            return skipped(entry.path);
        };
        let file_name = file_name.to_string();

        let dir_path = segments.join("/");
        let Some(parent) = self.resolve_path(&dir_path, true) else {
            tracing::warn!(path = %entry.path, "merge entry skipped: unresolvable directory");
            return skipped(entry.path);
        };

        let language = entry
            .language
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(CompactString::from)
            .unwrap_or_else(|| language::language_tag(&file_name));

        match self.child_named(parent, &file_name) {
            Some(existing) => {
                // 命中文件：原地更新，id 不变
                match self.node(existing).map(|n| n.kind) {
                    Some(Kind::File) => {
                        self.update_file_content(existing, &entry.content);
                        if let Some(node) = self.arena.get_mut(existing) {
                            node.language = language;
                        }
                        MergeOutcome {
                            path: entry.path,
                            applied: MergeApplied::Updated,
                            node: Some(existing),
                        }
                    }
                    // 目录占用了目标名：放弃该条目，唯一性不可破坏
                    _ => {
                        tracing::warn!(path = %entry.path, "merge entry skipped: name held by a folder");
                        skipped(entry.path)
                    }
                }
            }
            None => match self.insert_file(parent, &file_name, entry.content, language) {
                Ok(id) => MergeOutcome {
                    path: entry.path,
                    applied: MergeApplied::Created,
                    node: Some(id),
                },
                Err(err) => {
                    tracing::warn!(path = %entry.path, %err, "merge entry skipped");
                    skipped(entry.path)
                }
            },
        }
    }
}
