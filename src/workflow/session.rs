// ==========================================
// 物料盘点系统 - 盘点会话状态机
// ==========================================
// 状态:
// - Idle: 无进行中的盘点（会话开始 / 结束或取消之后）
// - Active(inventory_id, added_codes): 盘点进行中
// 转换:
// - Idle → Active: start（负责人非空，创建盘点单，added_codes 清空）
// - Active → Active: add_item（落库成功后记录物料编码）
// - Active → Idle: finalize / cancel（两者对数据无差别）
// 任一操作失败时状态保持不变
// ==========================================

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{info, info_span};
use uuid::Uuid;

use crate::domain::material::Material;
use crate::repository::InventoryRepository;
use crate::workflow::error::{WorkflowError, WorkflowResult};

/// 会话状态
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Idle,
    Active {
        inventory_id: i64,
        /// 本次会话已录入的物料编码（驱动“可选物料”过滤）
        added_codes: Vec<String>,
    },
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "Idle",
            SessionState::Active { .. } => "Active",
        }
    }
}

// ==========================================
// InventorySession - 盘点会话
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventorySession {
    session_id: Uuid,
    state: SessionState,
}

impl Default for InventorySession {
    fn default() -> Self {
        Self::new()
    }
}

impl InventorySession {
    pub fn new() -> Self {
        Self {
            session_id: Uuid::new_v4(),
            state: SessionState::Idle,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// 进行中的盘点单 ID
    pub fn active_inventory(&self) -> Option<i64> {
        match &self.state {
            SessionState::Active { inventory_id, .. } => Some(*inventory_id),
            SessionState::Idle => None,
        }
    }

    /// 本次会话已录入的物料编码
    pub fn added_codes(&self) -> &[String] {
        match &self.state {
            SessionState::Active { added_codes, .. } => added_codes,
            SessionState::Idle => &[],
        }
    }

    fn invalid_transition(&self, to: &str) -> WorkflowError {
        WorkflowError::InvalidStateTransition {
            from: self.state.name().to_string(),
            to: to.to_string(),
        }
    }

    /// 开始新盘点
    ///
    /// # 返回
    /// - Ok(i64): 新盘点单 ID
    /// - Err(Validation): 负责人为空
    /// - Err(InvalidStateTransition): 已有进行中的盘点
    pub fn start(&mut self, repo: &InventoryRepository, responsible: &str) -> WorkflowResult<i64> {
        let _span = info_span!("inventory_session", session_id = %self.session_id).entered();

        if self.active_inventory().is_some() {
            return Err(self.invalid_transition("Active"));
        }

        let responsible = responsible.trim();
        if responsible.is_empty() {
            return Err(WorkflowError::Validation(
                "o nome do responsável é obrigatório".to_string(),
            ));
        }

        let inventory_id = repo.create_inventory(responsible)?;
        self.state = SessionState::Active {
            inventory_id,
            added_codes: Vec::new(),
        };

        info!("盘点开始: inventory_id={}, responsible={}", inventory_id, responsible);
        Ok(inventory_id)
    }

    /// 录入一条明细
    ///
    /// # 返回
    /// - Err(Validation): 数量为负 / 物料已在本次会话录入
    /// - Err(InvalidStateTransition): 无进行中的盘点
    pub fn add_item(
        &mut self,
        repo: &InventoryRepository,
        material_code: &str,
        quantity: i64,
    ) -> WorkflowResult<()> {
        let _span = info_span!("inventory_session", session_id = %self.session_id).entered();

        let (inventory_id, added_codes) = match &mut self.state {
            SessionState::Active {
                inventory_id,
                added_codes,
            } => (*inventory_id, added_codes),
            SessionState::Idle => {
                return Err(WorkflowError::InvalidStateTransition {
                    from: "Idle".to_string(),
                    to: "Active".to_string(),
                })
            }
        };

        let material_code = material_code.trim();
        if material_code.is_empty() {
            return Err(WorkflowError::Validation(
                "selecione um material".to_string(),
            ));
        }
        if added_codes.iter().any(|c| c == material_code) {
            return Err(WorkflowError::Validation(format!(
                "o material {} já foi adicionado a este inventário",
                material_code
            )));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            WorkflowError::Validation(format!("quantidade inválida: {}", quantity))
        })?;

        repo.add_inventory_item(inventory_id, material_code, quantity)?;
        added_codes.push(material_code.to_string());

        info!(
            "明细录入: inventory_id={}, material_code={}, quantity={}",
            inventory_id, material_code, quantity
        );
        Ok(())
    }

    /// 结束盘点，返回已关闭的盘点单 ID
    pub fn finalize(&mut self) -> WorkflowResult<i64> {
        let inventory_id = self.close("finalize")?;
        info!(session_id = %self.session_id, "盘点完成: inventory_id={}", inventory_id);
        Ok(inventory_id)
    }

    /// 取消盘点，返回已关闭的盘点单 ID（已录入的明细保留）
    pub fn cancel(&mut self) -> WorkflowResult<i64> {
        let inventory_id = self.close("cancel")?;
        info!(session_id = %self.session_id, "盘点取消: inventory_id={}", inventory_id);
        Ok(inventory_id)
    }

    fn close(&mut self, action: &str) -> WorkflowResult<i64> {
        match std::mem::take(&mut self.state) {
            SessionState::Active { inventory_id, .. } => Ok(inventory_id),
            SessionState::Idle => Err(WorkflowError::InvalidStateTransition {
                from: "Idle".to_string(),
                to: format!("Idle ({})", action),
            }),
        }
    }

    /// 可选物料 = 全部物料 − 本次会话已录入的编码
    ///
    /// 只看会话内记录，不看该盘点单已落库的明细。
    pub fn available_materials(&self, materials: Vec<Material>) -> Vec<Material> {
        let added: HashSet<&str> = self.added_codes().iter().map(String::as_str).collect();
        materials
            .into_iter()
            .filter(|m| !added.contains(m.code.as_str()))
            .collect()
    }
}
