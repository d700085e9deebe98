//! Repairs for JavaScript object keys and literals that a bulk
//! Chinese→Spanish pass translated into invalid or mixed-script identifiers.
//!
//! Keys are restored to camelCase English identifiers; the few broken string
//! literals are restored to proper Spanish.

use crate::RuleTable;

pub(super) fn table() -> RuleTable {
    rule_table!("object-keys", {
        // Keys
        "TokenLímite" => "TokenLimit",
        "Límite de concurrencia:" => "ConcurrencyLimit:",
        "速率窗口(分钟):" => "RateWindow(min):",
        "速率SolicitudLímite:" => "RateRequestLimit:",
        "日CostoLímite($):" => "DailyCostLimit($):",
        "总CostoLímite($):" => "TotalCostLimit($):",
        "周OpusCostoLímite($):" => "WeeklyOpusCostLimit($):",
        "允许Modelo:" => "AllowedModels:",
        "允许Cliente:" => "AllowedClients:",
        "Solicitudes totales" => "totalRequests",
        "Token totales" => "totalTokens",
        "Costo total" => "totalCost",
        "平均费用/次" => "avgCost",
        "输入" => "inputTokens",
        "输出" => "outputTokens",
        "缓存创建" => "cacheCreateTokens",
        "缓存读取" => "cacheReadTokens",
        // Values
        "'无Límite'" => "'Sin límite'",
        "? '无Límite'" => "? 'Sin límite'",
        ": '无Límite'" => ": 'Sin límite'",
        "全部服务" => "Todos los servicios",
    })
}
