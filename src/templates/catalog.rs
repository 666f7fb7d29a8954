use super::{Category, Template};

const fn t(
    name: &'static str,
    description: &'static str,
    query: &'static str,
    params: &'static [&'static str],
) -> Template {
    Template {
        name,
        description,
        query,
        params,
    }
}

static AUTHENTICATION_ACCESS: &[Template] = &[
    t(
        "Failed Login Attempts",
        "Find failed authentication attempts",
        r#"SELECT sourceip, username, COUNT(*) as attempts,
LOGSOURCENAME(logsourceid) as logsource
FROM events
WHERE QIDNAME(qid) ILIKE '%fail%login%'
   OR QIDNAME(qid) ILIKE '%authentication%fail%'
GROUP BY sourceip, username
ORDER BY attempts DESC
LIMIT 100
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Successful Logins from Multiple IPs",
        "Users logging in from multiple source IPs",
        r#"SELECT username, UNIQUECOUNT(sourceip) as unique_ips,
COUNT(*) as login_count
FROM events
WHERE QIDNAME(qid) ILIKE '%success%login%'
  AND username IS NOT NULL
GROUP BY username
HAVING unique_ips > 3
ORDER BY unique_ips DESC
LAST 7 DAYS"#,
        &["threshold", "time_range"],
    ),
    t(
        "After Hours Authentication",
        "Login events outside business hours (customize hours)",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, username, QIDNAME(qid) as event
FROM events
WHERE (QIDNAME(qid) ILIKE '%login%' OR QIDNAME(qid) ILIKE '%authentication%')
  AND username IS NOT NULL
ORDER BY starttime DESC
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Privileged Account Activity",
        "Activity by admin/root accounts",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, username, QIDNAME(qid) as event,
LOGSOURCENAME(logsourceid) as source
FROM events
WHERE username ILIKE '%admin%'
   OR username ILIKE '%root%'
   OR username ILIKE '%administrator%'
ORDER BY starttime DESC
LIMIT 500
LAST 24 HOURS"#,
        &["username_pattern", "time_range"],
    ),
];

static NETWORK_TRAFFIC: &[Template] = &[
    t(
        "Top Talkers by Bytes",
        "Find hosts generating most network traffic",
        r#"SELECT sourceip,
SUM(sourcebytes + destinationbytes) as total_bytes,
SUM(sourcepackets + destinationpackets) as total_packets,
UNIQUECOUNT(destinationip) as unique_destinations
FROM flows
GROUP BY sourceip
ORDER BY total_bytes DESC
LIMIT 50
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "External RDP Connections",
        "RDP (port 3389) connections from external IPs",
        r#"SELECT sourceip, destinationip,
DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
SUM(sourcebytes) as bytes
FROM flows
WHERE destinationport = 3389
  AND NOT INCIDR('10.0.0.0/8', sourceip)
  AND NOT INCIDR('172.16.0.0/12', sourceip)
  AND NOT INCIDR('192.168.0.0/16', sourceip)
GROUP BY sourceip, destinationip
ORDER BY bytes DESC
LAST 24 HOURS"#,
        &["port", "time_range"],
    ),
    t(
        "SSH Connections",
        "All SSH (port 22) connections",
        r#"SELECT sourceip, destinationip,
COUNT(*) as connections,
SUM(sourcebytes) as total_bytes
FROM flows
WHERE destinationport = 22
GROUP BY sourceip, destinationip
ORDER BY connections DESC
LIMIT 100
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Suspicious Port Activity",
        "Traffic on commonly exploited ports",
        r#"SELECT destinationport, sourceip, destinationip,
COUNT(*) as connections
FROM flows
WHERE destinationport IN (4444, 5555, 6666, 1337, 31337, 8080, 8443)
GROUP BY destinationport, sourceip, destinationip
ORDER BY connections DESC
LAST 7 DAYS"#,
        &["ports", "time_range"],
    ),
    t(
        "Large Data Transfers",
        "Connections with high data volume (potential exfiltration)",
        r#"SELECT sourceip, destinationip, destinationport,
SUM(sourcebytes) as bytes_out,
SUM(destinationbytes) as bytes_in
FROM flows
WHERE sourcebytes > 100000000
GROUP BY sourceip, destinationip, destinationport
ORDER BY bytes_out DESC
LAST 24 HOURS"#,
        &["byte_threshold", "time_range"],
    ),
];

static THREAT_DETECTION: &[Template] = &[
    t(
        "High Magnitude Events",
        "Events with high magnitude score",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, destinationip, username,
QIDNAME(qid) as event_name,
magnitude, severity, credibility,
LOGSOURCENAME(logsourceid) as source
FROM events
WHERE magnitude >= 7
ORDER BY magnitude DESC, starttime DESC
LIMIT 500
LAST 24 HOURS"#,
        &["magnitude_threshold", "time_range"],
    ),
    t(
        "Potential Brute Force",
        "Many failed attempts followed by success from same IP",
        r#"SELECT sourceip, destinationip, username,
COUNT(*) as total_events,
LOGSOURCENAME(logsourceid) as source
FROM events
WHERE QIDNAME(qid) ILIKE '%fail%'
   OR QIDNAME(qid) ILIKE '%denied%'
GROUP BY sourceip, destinationip, username
HAVING total_events > 50
ORDER BY total_events DESC
LAST 1 HOURS"#,
        &["threshold", "time_range"],
    ),
    t(
        "Living off the Land Binaries (LOLBins)",
        "Detection of suspicious Windows binary execution",
        r#"SELECT sourceip, destinationip,
UTF8(payload) as command
FROM events
WHERE UTF8(payload) IMATCHES '.*(certutil|bitsadmin|mshta|regsvr32|rundll32|wmic|powershell|cmd)\.exe.*'
  AND LOGSOURCETYPENAME(devicetype) ILIKE '%Windows%'
GROUP BY sourceip
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Potential DNS Tunneling",
        "Unusually long DNS queries (potential data exfiltration)",
        r#"SELECT sourceip, destinationip,
COUNT(*) as query_count,
AVG(STRLEN(UTF8(payload))) as avg_query_length
FROM events
WHERE LOGSOURCETYPENAME(devicetype) ILIKE '%DNS%'
  AND STRLEN(UTF8(payload)) > 100
GROUP BY sourceip, destinationip
HAVING query_count > 100
ORDER BY avg_query_length DESC
LAST 24 HOURS"#,
        &["length_threshold", "time_range"],
    ),
    t(
        "Port Scan Detection",
        "Single source connecting to many ports",
        r#"SELECT sourceip, destinationip,
UNIQUECOUNT(destinationport) as unique_ports,
COUNT(*) as connection_attempts
FROM flows
GROUP BY sourceip, destinationip
HAVING unique_ports > 20
ORDER BY unique_ports DESC
LAST 1 HOURS"#,
        &["port_threshold", "time_range"],
    ),
];

static SYSTEM_MONITORING: &[Template] = &[
    t(
        "Events by Log Source",
        "Count events per log source",
        r#"SELECT LOGSOURCENAME(logsourceid) as log_source,
LOGSOURCETYPENAME(devicetype) as log_type,
COUNT(*) as event_count
FROM events
GROUP BY logsourceid, devicetype
ORDER BY event_count DESC
LIMIT 50
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Events by Category",
        "Event distribution by category",
        r#"SELECT CATEGORYNAME(category) as category,
COUNT(*) as event_count,
UNIQUECOUNT(sourceip) as unique_sources
FROM events
GROUP BY category
ORDER BY event_count DESC
LIMIT 50
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Payload Size Analysis",
        "Analyze payload sizes by log source",
        r#"SELECT LOGSOURCETYPENAME(devicetype) AS log_source,
MIN(STRLEN(UTF8(payload))) AS min_size,
MAX(STRLEN(UTF8(payload))) AS max_size,
AVG(STRLEN(UTF8(payload))) AS avg_size,
COUNT(*) AS event_count
FROM events
GROUP BY devicetype
ORDER BY avg_size DESC
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Error Events",
        "Find error and failure events",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
QIDNAME(qid) as event_name,
sourceip, destinationip,
LOGSOURCENAME(logsourceid) as source,
UTF8(payload) as details
FROM events
WHERE QIDNAME(qid) ILIKE '%error%'
   OR QIDNAME(qid) ILIKE '%fail%'
   OR QIDNAME(qid) ILIKE '%denied%'
ORDER BY starttime DESC
LIMIT 200
LAST 24 HOURS"#,
        &["time_range"],
    ),
];

static WINDOWS_EVENTS: &[Template] = &[
    t(
        "Windows Security Events Overview",
        "Summary of Windows security events",
        r#"SELECT QIDNAME(qid) as event_name, qid,
COUNT(*) as count
FROM events
WHERE LOGSOURCETYPENAME(devicetype) ILIKE '%Windows Security%'
GROUP BY qid
ORDER BY count DESC
LIMIT 100
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Process Creation (Event ID 4688)",
        "New process creation events",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, username,
UTF8(payload) as details
FROM events
WHERE LOGSOURCETYPENAME(devicetype) ILIKE '%Windows%'
  AND UTF8(payload) ILIKE '%4688%'
ORDER BY starttime DESC
LIMIT 500
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Account Logon Events (4624)",
        "Successful Windows logon events",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, username,
LOGSOURCENAME(logsourceid) as source
FROM events
WHERE LOGSOURCETYPENAME(devicetype) ILIKE '%Windows%'
  AND UTF8(payload) ILIKE '%4624%'
ORDER BY starttime DESC
LIMIT 500
LAST 24 HOURS"#,
        &["time_range"],
    ),
    t(
        "Account Lockouts (4740)",
        "Windows account lockout events",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, username,
LOGSOURCENAME(logsourceid) as source,
COUNT(*) as lockout_count
FROM events
WHERE LOGSOURCETYPENAME(devicetype) ILIKE '%Windows%'
  AND UTF8(payload) ILIKE '%4740%'
GROUP BY sourceip, username
ORDER BY lockout_count DESC
LAST 24 HOURS"#,
        &["time_range"],
    ),
];

static INVESTIGATION_QUERIES: &[Template] = &[
    t(
        "Activity by IP Address",
        "All events for a specific IP",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm:ss') as time,
QIDNAME(qid) as event_name,
sourceip, destinationip, sourceport, destinationport,
username, magnitude,
LOGSOURCENAME(logsourceid) as source
FROM events
WHERE sourceip = '{{IP_ADDRESS}}'
   OR destinationip = '{{IP_ADDRESS}}'
ORDER BY starttime DESC
LIMIT 1000
LAST 7 DAYS"#,
        &["ip_address", "time_range"],
    ),
    t(
        "Activity by Username",
        "All events for a specific user",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm:ss') as time,
QIDNAME(qid) as event_name,
sourceip, destinationip,
LOGSOURCENAME(logsourceid) as source,
magnitude
FROM events
WHERE username ILIKE '{{USERNAME}}'
ORDER BY starttime DESC
LIMIT 1000
LAST 7 DAYS"#,
        &["username", "time_range"],
    ),
    t(
        "Connections Between Two IPs",
        "Traffic between two specific hosts",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm') as time,
sourceip, destinationip,
sourceport, destinationport,
SUM(sourcebytes) as bytes_out,
SUM(destinationbytes) as bytes_in
FROM flows
WHERE (sourceip = '{{SOURCE_IP}}' AND destinationip = '{{DEST_IP}}')
   OR (sourceip = '{{DEST_IP}}' AND destinationip = '{{SOURCE_IP}}')
GROUP BY sourceip, destinationip, sourceport, destinationport
ORDER BY time DESC
LAST 7 DAYS"#,
        &["source_ip", "dest_ip", "time_range"],
    ),
    t(
        "Events in Offense",
        "All events contributing to an offense",
        r#"SELECT DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm:ss') as time,
QIDNAME(qid) as event_name,
sourceip, destinationip, username,
magnitude, credibility,
LOGSOURCENAME(logsourceid) as source
FROM events
WHERE INOFFENSE({{OFFENSE_ID}})
ORDER BY starttime ASC"#,
        &["offense_id"],
    ),
];

pub static CATEGORIES: &[Category] = &[
    Category {
        name: "Authentication & Access",
        templates: AUTHENTICATION_ACCESS,
    },
    Category {
        name: "Network & Traffic",
        templates: NETWORK_TRAFFIC,
    },
    Category {
        name: "Threat Detection",
        templates: THREAT_DETECTION,
    },
    Category {
        name: "System Monitoring",
        templates: SYSTEM_MONITORING,
    },
    Category {
        name: "Windows Events",
        templates: WINDOWS_EVENTS,
    },
    Category {
        name: "Investigation Queries",
        templates: INVESTIGATION_QUERIES,
    },
];
