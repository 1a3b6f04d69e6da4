//! 相对路径 → NodeId 解析
//!
//! 只剥离开头的 "./"；".." 不做特殊处理，按普通目录名对待。

use super::{Kind, NodeId, Workspace};

impl Workspace {
    /// 沿 '/' 分段向下查找目录；`create_intermediates` 时缺失的中间目录会被创建。
    ///
    /// 路径段命中文件节点视为解析失败（文件不能作为中间段）；
    /// 中间目录创建失败（如段名含 '.'）同样返回 None。
    pub fn resolve_path(&mut self, path: &str, create_intermediates: bool) -> Option<NodeId> {
        if path.is_empty() || path == "." || path == "./" {
            return Some(self.root());
        }

        let path = path.strip_prefix("./").unwrap_or(path);
        let mut current = self.root();

        for segment in path.split('/').filter(|s| !s.is_empty()) {
            match self.child_named(current, segment) {
                Some(id) if self.node(id).map(|n| n.kind) == Some(Kind::Dir) => {
                    current = id;
                }
                Some(_) => return None,
                None => {
                    if !create_intermediates {
                        return None;
                    }
                    current = self.create_folder(Some(current), segment).ok()?;
                }
            }
        }

        Some(current)
    }
}
