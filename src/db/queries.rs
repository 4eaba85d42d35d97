// src/db/queries.rs
//
// Catálogo cerrado de sentencias SQL, agrupado por propósito. Todo valor
// controlado por el cliente entra como parámetro ligado ($n), nunca
// concatenado al texto de la sentencia.

// --- Métricas del dashboard (ventana móvil de 7 días) ---

pub const LEADS_COUNT: &str = r#"
    SELECT COUNT(DISTINCT remitente_wa_id)
    FROM conversaciones
    WHERE fecha_mensaje >= CURRENT_DATE - INTERVAL '7 days'
"#;

pub const CONTACTED_COUNT: &str = r#"
    SELECT COUNT(*)
    FROM conversaciones
    WHERE fecha_mensaje >= CURRENT_DATE - INTERVAL '7 days'
"#;

pub const CONVERSIONS_COUNT: &str = r#"
    SELECT COUNT(*)
    FROM tb_citas
    WHERE fecha_mensaje >= CURRENT_DATE - INTERVAL '7 days'
"#;

// Brecha promedio entre mensajes consecutivos del mismo remitente, en minutos.
pub const AVG_RESPONSE_TIME: &str = r#"
    WITH mensajes AS (
        SELECT
            remitente_wa_id,
            fecha_mensaje,
            LAG(fecha_mensaje) OVER (
                PARTITION BY remitente_wa_id
                ORDER BY fecha_mensaje
            ) AS fecha_anterior
        FROM conversaciones
        WHERE fecha_mensaje >= CURRENT_DATE - INTERVAL '7 days'
    )
    SELECT AVG(EXTRACT(EPOCH FROM (fecha_mensaje - fecha_anterior)) / 60.0)
    FROM mensajes
    WHERE fecha_anterior IS NOT NULL
"#;

// Leads únicos por día de la semana, ordenados por primera aparición.
pub const WEEKLY_LEADS: &str = r#"
    SELECT
        trim(to_char(fecha_mensaje, 'Dy')) AS name,
        COUNT(DISTINCT remitente_wa_id) AS leads
    FROM conversaciones
    WHERE fecha_mensaje >= CURRENT_DATE - INTERVAL '7 days'
    GROUP BY trim(to_char(fecha_mensaje, 'Dy'))
    ORDER BY MIN(fecha_mensaje)
"#;

pub const RECENT_ACTIVITY: &str = r#"
    SELECT
        remitente_wa_id,
        mensaje_texto AS message,
        to_char(fecha_mensaje, 'HH24:MI') AS time
    FROM conversaciones
    WHERE fecha_mensaje >= CURRENT_DATE - INTERVAL '7 days'
    ORDER BY fecha_mensaje DESC
    LIMIT 10
"#;

// --- Armado de conversaciones ---

// Unión de entrantes (sin id ni bandera manual) y salientes, ascendente
// por fecha. La comparación de sentido es insensible a mayúsculas.
pub const GET_CONVERSATION: &str = r#"
    SELECT
        NULL::integer AS id,
        mensaje_texto,
        fecha_mensaje,
        sentido,
        NULL::boolean AS manual
    FROM conversaciones
    WHERE remitente_wa_id = $1 AND lower(sentido) = 'in'

    UNION ALL

    SELECT
        id,
        mensaje_texto,
        fecha_mensaje,
        'out' AS sentido,
        manual
    FROM mensajes_out
    WHERE remitente_wa_id = $1

    ORDER BY fecha_mensaje ASC
"#;

// Top 50 remitentes por interacción más reciente; last_incoming se rastrea
// aparte para calcular la ventana de respuesta.
pub const CHAT_LIST: &str = r#"
    SELECT
        remitente_wa_id,
        MAX(fecha_mensaje) AS last_interaction,
        MAX(CASE WHEN lower(sentido) = 'in' THEN fecha_mensaje END) AS last_incoming
    FROM conversaciones
    GROUP BY remitente_wa_id
    ORDER BY last_interaction DESC
    LIMIT 50
"#;

// --- Mensajes salientes ---

pub const INSERT_OUTBOUND_MESSAGE: &str = r#"
    INSERT INTO mensajes_out (remitente_wa_id, mensaje_texto, fecha_mensaje, estado)
    VALUES ($1, $2, now(), 'PENDIENTE')
"#;

pub const UPDATE_MANUAL_STATUS: &str = r#"
    UPDATE mensajes_out
    SET manual = $2
    WHERE id = $1
"#;

// --- Usuarios y clientes ---

pub const GET_USER_BY_ID: &str = r#"
    SELECT id, name, password, role, permission_level, client_id
    FROM users_main
    WHERE id = $1
"#;

pub const GET_ALL_USERS: &str = r#"
    SELECT id, name, role, permission_level, client_id
    FROM users_main
"#;

pub const GET_USERS_BY_CLIENT: &str = r#"
    SELECT id, name, role, permission_level, client_id
    FROM users_main
    WHERE client_id = $1
"#;

pub const INSERT_USER: &str = r#"
    INSERT INTO users_main (id, name, password, role, permission_level, client_id)
    VALUES ($1, $2, $3, $4, $5, $6)
"#;

pub const UPDATE_USER: &str = r#"
    UPDATE users_main
    SET name = $2, role = $3, permission_level = $4, client_id = $5
    WHERE id = $1
"#;

pub const UPDATE_PASSWORD: &str = r#"
    UPDATE users_main
    SET password = $2
    WHERE id = $1
"#;

pub const GET_ALL_CLIENTS: &str = "SELECT id, name FROM clients";

pub const INSERT_CLIENT: &str = "INSERT INTO clients (name) VALUES ($1) RETURNING id";

// --- Vacantes ---

pub const INSERT_VACANCY: &str = r#"
    INSERT INTO vacantes (nombre, client_id)
    VALUES ($1, $2)
    RETURNING id
"#;

pub const INSERT_CONDITIONS: &str = r#"
    INSERT INTO condiciones_generales
        (vacante_id, sueldo, bono, horarios, beneficios, requisitos, documentacion)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
"#;

pub const GET_VACANCY_OWNER: &str = "SELECT client_id FROM vacantes WHERE id = $1";

pub const DELETE_FAQS: &str = "DELETE FROM faq_dinamico WHERE vacante_id = $1";

pub const INSERT_FAQ: &str = r#"
    INSERT INTO faq_dinamico (vacante_id, pregunta, respuesta, palabras_clave)
    VALUES ($1, $2, $3, $4)
"#;

pub const GET_VACANCY_DETAIL: &str = r#"
    SELECT
        v.id, v.nombre, v.client_id, v.fecha_creacion, v.estado,
        c.sueldo, c.bono, c.horarios, c.beneficios, c.requisitos, c.documentacion
    FROM vacantes v
    LEFT JOIN condiciones_generales c ON v.id = c.vacante_id
    WHERE v.id = $1
"#;

pub const GET_VACANCY_FAQS: &str = r#"
    SELECT pregunta, respuesta, palabras_clave
    FROM faq_dinamico
    WHERE vacante_id = $1
    ORDER BY id
"#;

// --- Bitácora ---

pub const INSERT_LOG: &str = r#"
    INSERT INTO user_logs (user_id, action, details, ip_address, client_id)
    VALUES ($1, $2, $3, $4, $5)
"#;

pub const GET_LOGS: &str = r#"
    SELECT id, user_id, action, details, ip_address, client_id, timestamp
    FROM user_logs
    ORDER BY timestamp DESC
    LIMIT 100
"#;

pub const GET_LOGS_BY_CLIENT: &str = r#"
    SELECT id, user_id, action, details, ip_address, client_id, timestamp
    FROM user_logs
    WHERE client_id = $1
    ORDER BY timestamp DESC
    LIMIT 100
"#;
