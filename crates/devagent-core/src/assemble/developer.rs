// ABOUTME: Developer assembler producing a FastAPI-flavored code skeleton.
// ABOUTME: Import, model, and endpoint fragments are gated by the task's feature flags.

use std::fmt::Write;

use crate::classify::FeatureFlags;

fn import_block(flags: &FeatureFlags) -> String {
    let mut imports = vec![
        "from fastapi import FastAPI, HTTPException, Depends",
        "from pydantic import BaseModel",
        "from typing import Optional, List",
    ];
    if flags.needs_auth {
        imports.push("from fastapi.security import OAuth2PasswordBearer");
    }
    if flags.needs_realtime {
        imports.push("from fastapi import WebSocket");
    }
    imports.join("\n")
}

fn model_block(flags: &FeatureFlags) -> String {
    let mut models = Vec::new();
    if flags.needs_storage {
        models.push(
            "class FileModel(BaseModel):\n    filename: str\n    content_type: str\n    size: int\n    metadata: Optional[dict] = None",
        );
    }
    if flags.needs_auth {
        models.push(
            "class User(BaseModel):\n    username: str\n    email: str\n    disabled: Optional[bool] = None",
        );
    }
    models.join("\n\n")
}

fn endpoint_block(flags: &FeatureFlags) -> String {
    let mut endpoints = vec!["app = FastAPI(title='API Service')".to_string()];

    if flags.needs_auth {
        endpoints.push(
            "@app.post(\"/token\")\nasync def login(form_data: OAuth2PasswordRequestForm = Depends()):\n    # Implement authentication logic\n    pass"
                .to_string(),
        );
    }
    if flags.needs_storage {
        endpoints.push(
            "@app.post(\"/upload/\")\nasync def upload_file(file: FileModel):\n    try:\n        # Implement file upload logic\n        return {\"filename\": file.filename}\n    except Exception as e:\n        raise HTTPException(status_code=500, detail=str(e))"
                .to_string(),
        );
    }
    if flags.needs_search {
        endpoints.push(
            "@app.get(\"/search/\")\nasync def search(q: str):\n    # Implement search logic\n    return {\"results\": [], \"query\": q}"
                .to_string(),
        );
    }
    if flags.needs_realtime {
        endpoints.push(
            "@app.websocket(\"/ws\")\nasync def websocket_endpoint(websocket: WebSocket):\n    await websocket.accept()\n    # Implement realtime updates\n    pass"
                .to_string(),
        );
    }

    endpoints.join("\n\n")
}

/// Assemble the developer response: header comment, imports, models, and
/// endpoint skeletons.
pub fn assemble_development(task: &str) -> String {
    let flags = FeatureFlags::from_task(task);

    let mut out = String::new();
    writeln!(out, "# Implementation for: {task}").unwrap();
    writeln!(out).unwrap();
    writeln!(out, "{}", import_block(&flags)).unwrap();

    let models = model_block(&flags);
    if !models.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "{models}").unwrap();
    }

    writeln!(out).unwrap();
    writeln!(out, "{}", endpoint_block(&flags)).unwrap();

    out
}
