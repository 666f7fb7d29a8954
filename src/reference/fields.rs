use super::{Field, FieldGroup, FieldType};

const fn f(name: &'static str, ty: FieldType, description: &'static str) -> Field {
    Field {
        name,
        ty,
        description,
    }
}

pub static EVENT_FIELDS: &[Field] = &[
    // Core identification
    f("qid", FieldType::Integer, "QRadar event ID (use with QIDNAME function)"),
    f("qidEventId", FieldType::Integer, "Original event ID from the log source"),
    f("category", FieldType::Integer, "Low-level category ID (use with CATEGORYNAME)"),
    f("logsourceid", FieldType::Integer, "Log source ID (use with LOGSOURCENAME)"),
    f("devicetype", FieldType::Integer, "Device type ID (use with LOGSOURCETYPENAME)"),
    // Network
    f("sourceip", FieldType::Ip, "Source IP address"),
    f("destinationip", FieldType::Ip, "Destination IP address"),
    f("sourceport", FieldType::Integer, "Source port number"),
    f("destinationport", FieldType::Integer, "Destination port number"),
    f("sourcemac", FieldType::String, "Source MAC address"),
    f("destinationmac", FieldType::String, "Destination MAC address"),
    f("protocolid", FieldType::Integer, "Protocol ID (use with PROTOCOLNAME)"),
    // User and identity
    f("username", FieldType::String, "Username associated with the event"),
    f("identityip", FieldType::Ip, "Identity IP address"),
    f("identityhostname", FieldType::String, "Identity hostname"),
    // Time
    f("starttime", FieldType::Timestamp, "Event start time (milliseconds since epoch)"),
    f("endtime", FieldType::Timestamp, "Event end time"),
    f("devicetime", FieldType::Timestamp, "Time reported by the device"),
    // Event metadata
    f("eventcount", FieldType::Integer, "Number of events aggregated"),
    f("magnitude", FieldType::Integer, "Event magnitude (1-10)"),
    f("severity", FieldType::Integer, "Event severity (1-10)"),
    f("credibility", FieldType::Integer, "Event credibility (1-10)"),
    f("relevance", FieldType::Integer, "Event relevance (1-10)"),
    // Payload
    f("payload", FieldType::Blob, "Raw event payload (use UTF8 function to read)"),
    f("utf8payload", FieldType::String, "UTF-8 decoded payload"),
    // IPv6 and geography
    f("sourcev6", FieldType::Ipv6, "Source IPv6 address"),
    f("destinationv6", FieldType::Ipv6, "Destination IPv6 address"),
    f("sourcegeographiclocation", FieldType::String, "Source geographic location"),
    f("destinationgeographiclocation", FieldType::String, "Destination geographic location"),
    // Processing
    f("processorid", FieldType::Integer, "Event processor ID"),
    f("collectorid", FieldType::Integer, "Event collector ID"),
    f("domainid", FieldType::Integer, "Domain ID"),
    // Rules and offenses
    f("ruleid", FieldType::Integer, "Rule ID that triggered"),
    f("hasoffense", FieldType::Boolean, "Whether event is part of an offense"),
];

pub static FLOW_FIELDS: &[Field] = &[
    // Traffic volume
    f("sourcebytes", FieldType::Long, "Bytes sent from source"),
    f("destinationbytes", FieldType::Long, "Bytes sent to destination"),
    f("sourcepackets", FieldType::Long, "Packets from source"),
    f("destinationpackets", FieldType::Long, "Packets to destination"),
    f("totalbytes", FieldType::Long, "Total bytes transferred"),
    f("totalpackets", FieldType::Long, "Total packets transferred"),
    // Network
    f("sourceip", FieldType::Ip, "Source IP address"),
    f("destinationip", FieldType::Ip, "Destination IP address"),
    f("sourceport", FieldType::Integer, "Source port number"),
    f("destinationport", FieldType::Integer, "Destination port number"),
    f("protocolid", FieldType::Integer, "Protocol ID"),
    // Application
    f("applicationid", FieldType::Integer, "Application ID (use with APPLICATIONNAME)"),
    f("applicationname", FieldType::String, "Application name"),
    // ASN
    f("sourceasn", FieldType::Integer, "Source Autonomous System Number"),
    f("destinationasn", FieldType::Integer, "Destination Autonomous System Number"),
    // Payload
    f("sourcepayload", FieldType::Blob, "Source payload data"),
    f("destinationpayload", FieldType::Blob, "Destination payload data"),
    // Time
    f("starttime", FieldType::Timestamp, "Flow start time"),
    f("endtime", FieldType::Timestamp, "Flow end time"),
    f("firstpackettime", FieldType::Timestamp, "Time of first packet"),
    f("lastpackettime", FieldType::Timestamp, "Time of last packet"),
    // Geography
    f("sourcegeographiclocation", FieldType::String, "Source geographic location"),
    f("destinationgeographiclocation", FieldType::String, "Destination geographic location"),
    // Processing
    f("flowdirection", FieldType::String, "Flow direction (L2L, L2R, R2L, R2R)"),
    f("flowsourceid", FieldType::Integer, "Flow source ID"),
    f("processorid", FieldType::Integer, "Processor ID"),
    f("domainid", FieldType::Integer, "Domain ID"),
];

pub static EVENT_FIELD_GROUPS: &[FieldGroup] = &[
    (
        "Network",
        &[
            "sourceip",
            "destinationip",
            "sourceport",
            "destinationport",
            "sourcemac",
            "destinationmac",
            "protocolid",
            "sourcev6",
            "destinationv6",
        ],
    ),
    ("Identity", &["username", "identityip", "identityhostname"]),
    ("Time", &["starttime", "endtime", "devicetime"]),
    (
        "Event Info",
        &[
            "qid",
            "qidEventId",
            "category",
            "logsourceid",
            "devicetype",
            "eventcount",
            "magnitude",
            "severity",
            "credibility",
            "relevance",
        ],
    ),
    ("Payload", &["payload", "utf8payload"]),
    (
        "Geographic",
        &["sourcegeographiclocation", "destinationgeographiclocation"],
    ),
    (
        "Processing",
        &["processorid", "collectorid", "domainid", "ruleid", "hasoffense"],
    ),
];

pub static FLOW_FIELD_GROUPS: &[FieldGroup] = &[
    (
        "Traffic Volume",
        &[
            "sourcebytes",
            "destinationbytes",
            "sourcepackets",
            "destinationpackets",
            "totalbytes",
            "totalpackets",
        ],
    ),
    (
        "Network",
        &[
            "sourceip",
            "destinationip",
            "sourceport",
            "destinationport",
            "protocolid",
        ],
    ),
    ("Application", &["applicationid", "applicationname"]),
    ("ASN", &["sourceasn", "destinationasn"]),
    ("Payload", &["sourcepayload", "destinationpayload"]),
    (
        "Time",
        &["starttime", "endtime", "firstpackettime", "lastpackettime"],
    ),
    (
        "Geographic",
        &["sourcegeographiclocation", "destinationgeographiclocation"],
    ),
    (
        "Processing",
        &["flowdirection", "flowsourceid", "processorid", "domainid"],
    ),
];
