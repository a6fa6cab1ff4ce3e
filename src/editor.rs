//! 対話式レシピ編集モジュール
//!
//! 編集モードに入り、説明・食材・手順を書き換える。「Save」で表示モードに戻る（保存はしない）。

use crate::error::Result;
use crate::render::render_card;
use dialoguer::{Input, Select};
use snap_recipe_common::{EditMode, RecipeCard, RecipeSession};

/// 編集アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// 説明を書き換え
    Description(String),
    /// n番目の食材を書き換え
    Ingredient(usize, String),
    /// n番目の手順を書き換え
    Instruction(usize, String),
    /// 末尾に空の手順を追加
    AddInstruction,
    /// n番目の手順を削除
    DeleteInstruction(usize),
    /// 表示モードに戻る
    Save,
}

/// アクションを適用。Save のとき true を返す
pub fn apply_action(session: &mut RecipeSession, action: EditAction) -> Result<bool> {
    match action {
        EditAction::Description(text) => session.set_description(text)?,
        EditAction::Ingredient(index, value) => session.edit_ingredient(index, value)?,
        EditAction::Instruction(index, value) => session.edit_instruction(index, value)?,
        EditAction::AddInstruction => {
            session.add_instruction()?;
        }
        EditAction::DeleteInstruction(index) => {
            session.delete_instruction(index)?;
        }
        EditAction::Save => {
            if session.mode().is_editing() {
                session.toggle_editing();
            }
            return Ok(true);
        }
    }
    Ok(false)
}

/// 対話式で編集
pub fn run_interactive_edit(session: &mut RecipeSession) -> Result<()> {
    if session.card().is_none() {
        println!("編集するレシピがありません");
        return Ok(());
    }

    if session.mode() == EditMode::Viewing {
        session.toggle_editing();
    }
    println!("✏️  編集モード（Saveで表示に戻ります）\n");

    loop {
        let Some(card) = session.card() else {
            break;
        };
        let Some(action) = prompt_edit_action(card)? else {
            continue;
        };

        match apply_action(session, action) {
            Ok(true) => break,
            Ok(false) => {}
            Err(e) => println!("  → {}", e),
        }
    }

    if let Some(card) = session.card() {
        println!("\n{}", render_card(card, session.source()));
    }
    Ok(())
}

const MENU: &[&str] = &[
    "Edit description",
    "Edit ingredient",
    "Edit instruction",
    "Add instruction",
    "Delete instruction",
    "Save",
];

/// 編集アクション選択プロンプト（対象が選べなかった場合は None）
fn prompt_edit_action(card: &RecipeCard) -> Result<Option<EditAction>> {
    let choice = Select::new()
        .with_prompt("操作を選択")
        .items(MENU)
        .default(0)
        .interact()?;

    let action = match choice {
        0 => {
            let text: String = Input::new()
                .with_prompt("Description")
                .with_initial_text(card.description.clone())
                .allow_empty(true)
                .interact_text()?;
            EditAction::Description(text)
        }
        1 => {
            let Some(index) = pick_entry("Ingredient", card.ingredients.as_slice())? else {
                return Ok(None);
            };
            let value: String = Input::new()
                .with_prompt(format!("Ingredient {}", index + 1))
                .with_initial_text(card.ingredients.get(index).unwrap_or_default())
                .allow_empty(true)
                .interact_text()?;
            EditAction::Ingredient(index, value)
        }
        2 => {
            let Some(index) = pick_entry("Instruction", card.instructions.as_slice())? else {
                return Ok(None);
            };
            let value: String = Input::new()
                .with_prompt(format!("Step {}", index + 1))
                .with_initial_text(card.instructions.get(index).unwrap_or_default())
                .allow_empty(true)
                .interact_text()?;
            EditAction::Instruction(index, value)
        }
        3 => EditAction::AddInstruction,
        4 => {
            let Some(index) = pick_entry("Delete", card.instructions.as_slice())? else {
                return Ok(None);
            };
            EditAction::DeleteInstruction(index)
        }
        _ => EditAction::Save,
    };
    Ok(Some(action))
}

/// リストから位置を選ぶ（空なら None）
fn pick_entry(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    if items.is_empty() {
        println!("  → 項目がありません");
        return Ok(None);
    }
    let labels: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(n, s)| format!("{}. {}", n + 1, s))
        .collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(labels.as_slice())
        .default(0)
        .interact()?;
    Ok(Some(index))
}
